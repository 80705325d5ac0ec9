//! Generated keysym tables: names and legacy 8-bit charset blocks.
//!
//! Regenerate from `X11/keysymdef.h`; rows are sorted by keysym.

/// Keysym name to value, including aliases.
pub(crate) static NAME_TO_KEYSYM: phf::Map<&'static str, u32> = phf::phf_map! {
    "BackSpace" => 0xff08,
    "Tab" => 0xff09,
    "Return" => 0xff0d,
    "Escape" => 0xff1b,
    "Delete" => 0xffff,
    "Multi_key" => 0xff20,
    "Home" => 0xff50,
    "Left" => 0xff51,
    "Up" => 0xff52,
    "Right" => 0xff53,
    "Down" => 0xff54,
    "Page_Up" => 0xff55,
    "Page_Down" => 0xff56,
    "End" => 0xff57,
    "Insert" => 0xff63,
    "Mode_switch" => 0xff7e,
    "KP_Space" => 0xff80,
    "KP_Tab" => 0xff89,
    "KP_Enter" => 0xff8d,
    "KP_Equal" => 0xffbd,
    "KP_Multiply" => 0xffaa,
    "KP_Add" => 0xffab,
    "KP_Separator" => 0xffac,
    "KP_Subtract" => 0xffad,
    "KP_Decimal" => 0xffae,
    "KP_Divide" => 0xffaf,
    "KP_0" => 0xffb0,
    "KP_1" => 0xffb1,
    "KP_2" => 0xffb2,
    "KP_3" => 0xffb3,
    "KP_4" => 0xffb4,
    "KP_5" => 0xffb5,
    "KP_6" => 0xffb6,
    "KP_7" => 0xffb7,
    "KP_8" => 0xffb8,
    "KP_9" => 0xffb9,
    "Shift_L" => 0xffe1,
    "Shift_R" => 0xffe2,
    "Control_L" => 0xffe3,
    "Control_R" => 0xffe4,
    "Caps_Lock" => 0xffe5,
    "Shift_Lock" => 0xffe6,
    "Meta_L" => 0xffe7,
    "Meta_R" => 0xffe8,
    "Alt_L" => 0xffe9,
    "Alt_R" => 0xffea,
    "Super_L" => 0xffeb,
    "Super_R" => 0xffec,
    "Hyper_L" => 0xffed,
    "Hyper_R" => 0xffee,
    "ISO_Level3_Shift" => 0xfe03,
    "ISO_Enter" => 0xfe34,
    "dead_grave" => 0xfe50,
    "dead_acute" => 0xfe51,
    "dead_circumflex" => 0xfe52,
    "dead_tilde" => 0xfe53,
    "dead_perispomeni" => 0xfe53,
    "dead_macron" => 0xfe54,
    "dead_breve" => 0xfe55,
    "dead_abovedot" => 0xfe56,
    "dead_diaeresis" => 0xfe57,
    "dead_abovering" => 0xfe58,
    "dead_doubleacute" => 0xfe59,
    "dead_caron" => 0xfe5a,
    "dead_cedilla" => 0xfe5b,
    "dead_ogonek" => 0xfe5c,
    "dead_iota" => 0xfe5d,
    "dead_voiced_sound" => 0xfe5e,
    "dead_semivoiced_sound" => 0xfe5f,
    "dead_belowdot" => 0xfe60,
    "dead_hook" => 0xfe61,
    "dead_horn" => 0xfe62,
    "dead_stroke" => 0xfe63,
    "dead_abovecomma" => 0xfe64,
    "dead_psili" => 0xfe64,
    "dead_abovereversedcomma" => 0xfe65,
    "dead_dasia" => 0xfe65,
    "dead_doublegrave" => 0xfe66,
    "space" => 0x0020,
    "exclam" => 0x0021,
    "quotedbl" => 0x0022,
    "numbersign" => 0x0023,
    "dollar" => 0x0024,
    "percent" => 0x0025,
    "ampersand" => 0x0026,
    "apostrophe" => 0x0027,
    "quoteright" => 0x0027,
    "parenleft" => 0x0028,
    "parenright" => 0x0029,
    "asterisk" => 0x002a,
    "plus" => 0x002b,
    "comma" => 0x002c,
    "minus" => 0x002d,
    "period" => 0x002e,
    "slash" => 0x002f,
    "0" => 0x0030,
    "1" => 0x0031,
    "2" => 0x0032,
    "3" => 0x0033,
    "4" => 0x0034,
    "5" => 0x0035,
    "6" => 0x0036,
    "7" => 0x0037,
    "8" => 0x0038,
    "9" => 0x0039,
    "colon" => 0x003a,
    "semicolon" => 0x003b,
    "less" => 0x003c,
    "equal" => 0x003d,
    "greater" => 0x003e,
    "question" => 0x003f,
    "at" => 0x0040,
    "A" => 0x0041,
    "B" => 0x0042,
    "C" => 0x0043,
    "D" => 0x0044,
    "E" => 0x0045,
    "F" => 0x0046,
    "G" => 0x0047,
    "H" => 0x0048,
    "I" => 0x0049,
    "J" => 0x004a,
    "K" => 0x004b,
    "L" => 0x004c,
    "M" => 0x004d,
    "N" => 0x004e,
    "O" => 0x004f,
    "P" => 0x0050,
    "Q" => 0x0051,
    "R" => 0x0052,
    "S" => 0x0053,
    "T" => 0x0054,
    "U" => 0x0055,
    "V" => 0x0056,
    "W" => 0x0057,
    "X" => 0x0058,
    "Y" => 0x0059,
    "Z" => 0x005a,
    "bracketleft" => 0x005b,
    "backslash" => 0x005c,
    "bracketright" => 0x005d,
    "asciicircum" => 0x005e,
    "underscore" => 0x005f,
    "grave" => 0x0060,
    "quoteleft" => 0x0060,
    "a" => 0x0061,
    "b" => 0x0062,
    "c" => 0x0063,
    "d" => 0x0064,
    "e" => 0x0065,
    "f" => 0x0066,
    "g" => 0x0067,
    "h" => 0x0068,
    "i" => 0x0069,
    "j" => 0x006a,
    "k" => 0x006b,
    "l" => 0x006c,
    "m" => 0x006d,
    "n" => 0x006e,
    "o" => 0x006f,
    "p" => 0x0070,
    "q" => 0x0071,
    "r" => 0x0072,
    "s" => 0x0073,
    "t" => 0x0074,
    "u" => 0x0075,
    "v" => 0x0076,
    "w" => 0x0077,
    "x" => 0x0078,
    "y" => 0x0079,
    "z" => 0x007a,
    "braceleft" => 0x007b,
    "bar" => 0x007c,
    "braceright" => 0x007d,
    "asciitilde" => 0x007e,
    "nobreakspace" => 0x00a0,
    "exclamdown" => 0x00a1,
    "cent" => 0x00a2,
    "sterling" => 0x00a3,
    "currency" => 0x00a4,
    "yen" => 0x00a5,
    "brokenbar" => 0x00a6,
    "section" => 0x00a7,
    "diaeresis" => 0x00a8,
    "copyright" => 0x00a9,
    "ordfeminine" => 0x00aa,
    "guillemotleft" => 0x00ab,
    "notsign" => 0x00ac,
    "hyphen" => 0x00ad,
    "registered" => 0x00ae,
    "macron" => 0x00af,
    "degree" => 0x00b0,
    "plusminus" => 0x00b1,
    "twosuperior" => 0x00b2,
    "threesuperior" => 0x00b3,
    "acute" => 0x00b4,
    "mu" => 0x00b5,
    "paragraph" => 0x00b6,
    "periodcentered" => 0x00b7,
    "cedilla" => 0x00b8,
    "onesuperior" => 0x00b9,
    "masculine" => 0x00ba,
    "guillemotright" => 0x00bb,
    "onequarter" => 0x00bc,
    "onehalf" => 0x00bd,
    "threequarters" => 0x00be,
    "questiondown" => 0x00bf,
    "Agrave" => 0x00c0,
    "Aacute" => 0x00c1,
    "Acircumflex" => 0x00c2,
    "Atilde" => 0x00c3,
    "Adiaeresis" => 0x00c4,
    "Aring" => 0x00c5,
    "AE" => 0x00c6,
    "Ccedilla" => 0x00c7,
    "Egrave" => 0x00c8,
    "Eacute" => 0x00c9,
    "Ecircumflex" => 0x00ca,
    "Ediaeresis" => 0x00cb,
    "Igrave" => 0x00cc,
    "Iacute" => 0x00cd,
    "Icircumflex" => 0x00ce,
    "Idiaeresis" => 0x00cf,
    "ETH" => 0x00d0,
    "Eth" => 0x00d0,
    "Ntilde" => 0x00d1,
    "Ograve" => 0x00d2,
    "Oacute" => 0x00d3,
    "Ocircumflex" => 0x00d4,
    "Otilde" => 0x00d5,
    "Odiaeresis" => 0x00d6,
    "multiply" => 0x00d7,
    "Oslash" => 0x00d8,
    "Ooblique" => 0x00d8,
    "Ugrave" => 0x00d9,
    "Uacute" => 0x00da,
    "Ucircumflex" => 0x00db,
    "Udiaeresis" => 0x00dc,
    "Yacute" => 0x00dd,
    "THORN" => 0x00de,
    "Thorn" => 0x00de,
    "ssharp" => 0x00df,
    "agrave" => 0x00e0,
    "aacute" => 0x00e1,
    "acircumflex" => 0x00e2,
    "atilde" => 0x00e3,
    "adiaeresis" => 0x00e4,
    "aring" => 0x00e5,
    "ae" => 0x00e6,
    "ccedilla" => 0x00e7,
    "egrave" => 0x00e8,
    "eacute" => 0x00e9,
    "ecircumflex" => 0x00ea,
    "ediaeresis" => 0x00eb,
    "igrave" => 0x00ec,
    "iacute" => 0x00ed,
    "icircumflex" => 0x00ee,
    "idiaeresis" => 0x00ef,
    "eth" => 0x00f0,
    "ntilde" => 0x00f1,
    "ograve" => 0x00f2,
    "oacute" => 0x00f3,
    "ocircumflex" => 0x00f4,
    "otilde" => 0x00f5,
    "odiaeresis" => 0x00f6,
    "division" => 0x00f7,
    "oslash" => 0x00f8,
    "ooblique" => 0x00f8,
    "ugrave" => 0x00f9,
    "uacute" => 0x00fa,
    "ucircumflex" => 0x00fb,
    "udiaeresis" => 0x00fc,
    "yacute" => 0x00fd,
    "thorn" => 0x00fe,
    "ydiaeresis" => 0x00ff,
    "Aogonek" => 0x01a1,
    "breve" => 0x01a2,
    "Lstroke" => 0x01a3,
    "Lcaron" => 0x01a5,
    "Sacute" => 0x01a6,
    "Scaron" => 0x01a9,
    "Scedilla" => 0x01aa,
    "Tcaron" => 0x01ab,
    "Zacute" => 0x01ac,
    "Zcaron" => 0x01ae,
    "Zabovedot" => 0x01af,
    "aogonek" => 0x01b1,
    "ogonek" => 0x01b2,
    "lstroke" => 0x01b3,
    "lcaron" => 0x01b5,
    "sacute" => 0x01b6,
    "caron" => 0x01b7,
    "scaron" => 0x01b9,
    "scedilla" => 0x01ba,
    "tcaron" => 0x01bb,
    "zacute" => 0x01bc,
    "doubleacute" => 0x01bd,
    "zcaron" => 0x01be,
    "zabovedot" => 0x01bf,
    "Racute" => 0x01c0,
    "Abreve" => 0x01c3,
    "Lacute" => 0x01c5,
    "Cacute" => 0x01c6,
    "Ccaron" => 0x01c8,
    "Eogonek" => 0x01ca,
    "Ecaron" => 0x01cc,
    "Dcaron" => 0x01cf,
    "Dstroke" => 0x01d0,
    "Nacute" => 0x01d1,
    "Ncaron" => 0x01d2,
    "Odoubleacute" => 0x01d5,
    "Rcaron" => 0x01d8,
    "Uring" => 0x01d9,
    "Udoubleacute" => 0x01db,
    "Tcedilla" => 0x01de,
    "racute" => 0x01e0,
    "abreve" => 0x01e3,
    "lacute" => 0x01e5,
    "cacute" => 0x01e6,
    "ccaron" => 0x01e8,
    "eogonek" => 0x01ea,
    "ecaron" => 0x01ec,
    "dcaron" => 0x01ef,
    "dstroke" => 0x01f0,
    "nacute" => 0x01f1,
    "ncaron" => 0x01f2,
    "odoubleacute" => 0x01f5,
    "rcaron" => 0x01f8,
    "uring" => 0x01f9,
    "udoubleacute" => 0x01fb,
    "tcedilla" => 0x01fe,
    "abovedot" => 0x01ff,
    "Hstroke" => 0x02a1,
    "Hcircumflex" => 0x02a6,
    "Iabovedot" => 0x02a9,
    "Gbreve" => 0x02ab,
    "Jcircumflex" => 0x02ac,
    "hstroke" => 0x02b1,
    "hcircumflex" => 0x02b6,
    "idotless" => 0x02b9,
    "gbreve" => 0x02bb,
    "jcircumflex" => 0x02bc,
    "Cabovedot" => 0x02c5,
    "Ccircumflex" => 0x02c6,
    "Gabovedot" => 0x02d5,
    "Gcircumflex" => 0x02d8,
    "Ubreve" => 0x02dd,
    "Scircumflex" => 0x02de,
    "cabovedot" => 0x02e5,
    "ccircumflex" => 0x02e6,
    "gabovedot" => 0x02f5,
    "gcircumflex" => 0x02f8,
    "ubreve" => 0x02fd,
    "scircumflex" => 0x02fe,
    "kra" => 0x03a2,
    "kappa" => 0x03a2,
    "Rcedilla" => 0x03a3,
    "Itilde" => 0x03a5,
    "Lcedilla" => 0x03a6,
    "Emacron" => 0x03aa,
    "Gcedilla" => 0x03ab,
    "Tslash" => 0x03ac,
    "rcedilla" => 0x03b3,
    "itilde" => 0x03b5,
    "lcedilla" => 0x03b6,
    "emacron" => 0x03ba,
    "gcedilla" => 0x03bb,
    "tslash" => 0x03bc,
    "ENG" => 0x03bd,
    "eng" => 0x03bf,
    "Amacron" => 0x03c0,
    "Iogonek" => 0x03c7,
    "Eabovedot" => 0x03cc,
    "Imacron" => 0x03cf,
    "Ncedilla" => 0x03d1,
    "Omacron" => 0x03d2,
    "Kcedilla" => 0x03d3,
    "Uogonek" => 0x03d9,
    "Utilde" => 0x03dd,
    "Umacron" => 0x03de,
    "amacron" => 0x03e0,
    "iogonek" => 0x03e7,
    "eabovedot" => 0x03ec,
    "imacron" => 0x03ef,
    "ncedilla" => 0x03f1,
    "omacron" => 0x03f2,
    "kcedilla" => 0x03f3,
    "uogonek" => 0x03f9,
    "utilde" => 0x03fd,
    "umacron" => 0x03fe,
    "OE" => 0x13bc,
    "oe" => 0x13bd,
    "Ydiaeresis" => 0x13be,
    "Serbian_dje" => 0x06a1,
    "Macedonia_gje" => 0x06a2,
    "Cyrillic_io" => 0x06a3,
    "Ukrainian_ie" => 0x06a4,
    "Ukranian_je" => 0x06a4,
    "Macedonia_dse" => 0x06a5,
    "Ukrainian_i" => 0x06a6,
    "Ukranian_i" => 0x06a6,
    "Ukrainian_yi" => 0x06a7,
    "Ukranian_yi" => 0x06a7,
    "Cyrillic_je" => 0x06a8,
    "Serbian_je" => 0x06a8,
    "Cyrillic_lje" => 0x06a9,
    "Serbian_lje" => 0x06a9,
    "Cyrillic_nje" => 0x06aa,
    "Serbian_nje" => 0x06aa,
    "Serbian_tshe" => 0x06ab,
    "Macedonia_kje" => 0x06ac,
    "Ukrainian_ghe_with_upturn" => 0x06ad,
    "Byelorussian_shortu" => 0x06ae,
    "Cyrillic_dzhe" => 0x06af,
    "Serbian_dze" => 0x06af,
    "numerosign" => 0x06b0,
    "Serbian_DJE" => 0x06b1,
    "Macedonia_GJE" => 0x06b2,
    "Cyrillic_IO" => 0x06b3,
    "Ukrainian_IE" => 0x06b4,
    "Ukranian_JE" => 0x06b4,
    "Macedonia_DSE" => 0x06b5,
    "Ukrainian_I" => 0x06b6,
    "Ukranian_I" => 0x06b6,
    "Ukrainian_YI" => 0x06b7,
    "Ukranian_YI" => 0x06b7,
    "Cyrillic_JE" => 0x06b8,
    "Serbian_JE" => 0x06b8,
    "Cyrillic_LJE" => 0x06b9,
    "Serbian_LJE" => 0x06b9,
    "Cyrillic_NJE" => 0x06ba,
    "Serbian_NJE" => 0x06ba,
    "Serbian_TSHE" => 0x06bb,
    "Macedonia_KJE" => 0x06bc,
    "Ukrainian_GHE_WITH_UPTURN" => 0x06bd,
    "Byelorussian_SHORTU" => 0x06be,
    "Cyrillic_DZHE" => 0x06bf,
    "Serbian_DZE" => 0x06bf,
    "Cyrillic_yu" => 0x06c0,
    "Cyrillic_a" => 0x06c1,
    "Cyrillic_be" => 0x06c2,
    "Cyrillic_tse" => 0x06c3,
    "Cyrillic_de" => 0x06c4,
    "Cyrillic_ie" => 0x06c5,
    "Cyrillic_ef" => 0x06c6,
    "Cyrillic_ghe" => 0x06c7,
    "Cyrillic_ha" => 0x06c8,
    "Cyrillic_i" => 0x06c9,
    "Cyrillic_shorti" => 0x06ca,
    "Cyrillic_ka" => 0x06cb,
    "Cyrillic_el" => 0x06cc,
    "Cyrillic_em" => 0x06cd,
    "Cyrillic_en" => 0x06ce,
    "Cyrillic_o" => 0x06cf,
    "Cyrillic_pe" => 0x06d0,
    "Cyrillic_ya" => 0x06d1,
    "Cyrillic_er" => 0x06d2,
    "Cyrillic_es" => 0x06d3,
    "Cyrillic_te" => 0x06d4,
    "Cyrillic_u" => 0x06d5,
    "Cyrillic_zhe" => 0x06d6,
    "Cyrillic_ve" => 0x06d7,
    "Cyrillic_softsign" => 0x06d8,
    "Cyrillic_yeru" => 0x06d9,
    "Cyrillic_ze" => 0x06da,
    "Cyrillic_sha" => 0x06db,
    "Cyrillic_e" => 0x06dc,
    "Cyrillic_shcha" => 0x06dd,
    "Cyrillic_che" => 0x06de,
    "Cyrillic_hardsign" => 0x06df,
    "Cyrillic_YU" => 0x06e0,
    "Cyrillic_A" => 0x06e1,
    "Cyrillic_BE" => 0x06e2,
    "Cyrillic_TSE" => 0x06e3,
    "Cyrillic_DE" => 0x06e4,
    "Cyrillic_IE" => 0x06e5,
    "Cyrillic_EF" => 0x06e6,
    "Cyrillic_GHE" => 0x06e7,
    "Cyrillic_HA" => 0x06e8,
    "Cyrillic_I" => 0x06e9,
    "Cyrillic_SHORTI" => 0x06ea,
    "Cyrillic_KA" => 0x06eb,
    "Cyrillic_EL" => 0x06ec,
    "Cyrillic_EM" => 0x06ed,
    "Cyrillic_EN" => 0x06ee,
    "Cyrillic_O" => 0x06ef,
    "Cyrillic_PE" => 0x06f0,
    "Cyrillic_YA" => 0x06f1,
    "Cyrillic_ER" => 0x06f2,
    "Cyrillic_ES" => 0x06f3,
    "Cyrillic_TE" => 0x06f4,
    "Cyrillic_U" => 0x06f5,
    "Cyrillic_ZHE" => 0x06f6,
    "Cyrillic_VE" => 0x06f7,
    "Cyrillic_SOFTSIGN" => 0x06f8,
    "Cyrillic_YERU" => 0x06f9,
    "Cyrillic_ZE" => 0x06fa,
    "Cyrillic_SHA" => 0x06fb,
    "Cyrillic_E" => 0x06fc,
    "Cyrillic_SHCHA" => 0x06fd,
    "Cyrillic_CHE" => 0x06fe,
    "Cyrillic_HARDSIGN" => 0x06ff,
    "Greek_ALPHAaccent" => 0x07a1,
    "Greek_EPSILONaccent" => 0x07a2,
    "Greek_ETAaccent" => 0x07a3,
    "Greek_IOTAaccent" => 0x07a4,
    "Greek_IOTAdieresis" => 0x07a5,
    "Greek_IOTAdiaeresis" => 0x07a5,
    "Greek_OMICRONaccent" => 0x07a7,
    "Greek_UPSILONaccent" => 0x07a8,
    "Greek_UPSILONdieresis" => 0x07a9,
    "Greek_OMEGAaccent" => 0x07ab,
    "Greek_accentdieresis" => 0x07ae,
    "Greek_horizbar" => 0x07af,
    "Greek_alphaaccent" => 0x07b1,
    "Greek_epsilonaccent" => 0x07b2,
    "Greek_etaaccent" => 0x07b3,
    "Greek_iotaaccent" => 0x07b4,
    "Greek_iotadieresis" => 0x07b5,
    "Greek_iotaaccentdieresis" => 0x07b6,
    "Greek_omicronaccent" => 0x07b7,
    "Greek_upsilonaccent" => 0x07b8,
    "Greek_upsilondieresis" => 0x07b9,
    "Greek_upsilonaccentdieresis" => 0x07ba,
    "Greek_omegaaccent" => 0x07bb,
    "Greek_ALPHA" => 0x07c1,
    "Greek_BETA" => 0x07c2,
    "Greek_GAMMA" => 0x07c3,
    "Greek_DELTA" => 0x07c4,
    "Greek_EPSILON" => 0x07c5,
    "Greek_ZETA" => 0x07c6,
    "Greek_ETA" => 0x07c7,
    "Greek_THETA" => 0x07c8,
    "Greek_IOTA" => 0x07c9,
    "Greek_KAPPA" => 0x07ca,
    "Greek_LAMDA" => 0x07cb,
    "Greek_LAMBDA" => 0x07cb,
    "Greek_MU" => 0x07cc,
    "Greek_NU" => 0x07cd,
    "Greek_XI" => 0x07ce,
    "Greek_OMICRON" => 0x07cf,
    "Greek_PI" => 0x07d0,
    "Greek_RHO" => 0x07d1,
    "Greek_SIGMA" => 0x07d2,
    "Greek_TAU" => 0x07d4,
    "Greek_UPSILON" => 0x07d5,
    "Greek_PHI" => 0x07d6,
    "Greek_CHI" => 0x07d7,
    "Greek_PSI" => 0x07d8,
    "Greek_OMEGA" => 0x07d9,
    "Greek_alpha" => 0x07e1,
    "Greek_beta" => 0x07e2,
    "Greek_gamma" => 0x07e3,
    "Greek_delta" => 0x07e4,
    "Greek_epsilon" => 0x07e5,
    "Greek_zeta" => 0x07e6,
    "Greek_eta" => 0x07e7,
    "Greek_theta" => 0x07e8,
    "Greek_iota" => 0x07e9,
    "Greek_kappa" => 0x07ea,
    "Greek_lamda" => 0x07eb,
    "Greek_lambda" => 0x07eb,
    "Greek_mu" => 0x07ec,
    "Greek_nu" => 0x07ed,
    "Greek_xi" => 0x07ee,
    "Greek_omicron" => 0x07ef,
    "Greek_pi" => 0x07f0,
    "Greek_rho" => 0x07f1,
    "Greek_sigma" => 0x07f2,
    "Greek_finalsmallsigma" => 0x07f3,
    "Greek_tau" => 0x07f4,
    "Greek_upsilon" => 0x07f5,
    "Greek_phi" => 0x07f6,
    "Greek_chi" => 0x07f7,
    "Greek_psi" => 0x07f8,
    "Greek_omega" => 0x07f9,
    "EuroSign" => 0x20ac,
};

/// Keysym value to its preferred name.
pub(crate) static KEYSYM_TO_NAME: phf::Map<u32, &'static str> = phf::phf_map! {
    0x0020u32 => "space",
    0x0021u32 => "exclam",
    0x0022u32 => "quotedbl",
    0x0023u32 => "numbersign",
    0x0024u32 => "dollar",
    0x0025u32 => "percent",
    0x0026u32 => "ampersand",
    0x0027u32 => "apostrophe",
    0x0028u32 => "parenleft",
    0x0029u32 => "parenright",
    0x002au32 => "asterisk",
    0x002bu32 => "plus",
    0x002cu32 => "comma",
    0x002du32 => "minus",
    0x002eu32 => "period",
    0x002fu32 => "slash",
    0x0030u32 => "0",
    0x0031u32 => "1",
    0x0032u32 => "2",
    0x0033u32 => "3",
    0x0034u32 => "4",
    0x0035u32 => "5",
    0x0036u32 => "6",
    0x0037u32 => "7",
    0x0038u32 => "8",
    0x0039u32 => "9",
    0x003au32 => "colon",
    0x003bu32 => "semicolon",
    0x003cu32 => "less",
    0x003du32 => "equal",
    0x003eu32 => "greater",
    0x003fu32 => "question",
    0x0040u32 => "at",
    0x0041u32 => "A",
    0x0042u32 => "B",
    0x0043u32 => "C",
    0x0044u32 => "D",
    0x0045u32 => "E",
    0x0046u32 => "F",
    0x0047u32 => "G",
    0x0048u32 => "H",
    0x0049u32 => "I",
    0x004au32 => "J",
    0x004bu32 => "K",
    0x004cu32 => "L",
    0x004du32 => "M",
    0x004eu32 => "N",
    0x004fu32 => "O",
    0x0050u32 => "P",
    0x0051u32 => "Q",
    0x0052u32 => "R",
    0x0053u32 => "S",
    0x0054u32 => "T",
    0x0055u32 => "U",
    0x0056u32 => "V",
    0x0057u32 => "W",
    0x0058u32 => "X",
    0x0059u32 => "Y",
    0x005au32 => "Z",
    0x005bu32 => "bracketleft",
    0x005cu32 => "backslash",
    0x005du32 => "bracketright",
    0x005eu32 => "asciicircum",
    0x005fu32 => "underscore",
    0x0060u32 => "grave",
    0x0061u32 => "a",
    0x0062u32 => "b",
    0x0063u32 => "c",
    0x0064u32 => "d",
    0x0065u32 => "e",
    0x0066u32 => "f",
    0x0067u32 => "g",
    0x0068u32 => "h",
    0x0069u32 => "i",
    0x006au32 => "j",
    0x006bu32 => "k",
    0x006cu32 => "l",
    0x006du32 => "m",
    0x006eu32 => "n",
    0x006fu32 => "o",
    0x0070u32 => "p",
    0x0071u32 => "q",
    0x0072u32 => "r",
    0x0073u32 => "s",
    0x0074u32 => "t",
    0x0075u32 => "u",
    0x0076u32 => "v",
    0x0077u32 => "w",
    0x0078u32 => "x",
    0x0079u32 => "y",
    0x007au32 => "z",
    0x007bu32 => "braceleft",
    0x007cu32 => "bar",
    0x007du32 => "braceright",
    0x007eu32 => "asciitilde",
    0x00a0u32 => "nobreakspace",
    0x00a1u32 => "exclamdown",
    0x00a2u32 => "cent",
    0x00a3u32 => "sterling",
    0x00a4u32 => "currency",
    0x00a5u32 => "yen",
    0x00a6u32 => "brokenbar",
    0x00a7u32 => "section",
    0x00a8u32 => "diaeresis",
    0x00a9u32 => "copyright",
    0x00aau32 => "ordfeminine",
    0x00abu32 => "guillemotleft",
    0x00acu32 => "notsign",
    0x00adu32 => "hyphen",
    0x00aeu32 => "registered",
    0x00afu32 => "macron",
    0x00b0u32 => "degree",
    0x00b1u32 => "plusminus",
    0x00b2u32 => "twosuperior",
    0x00b3u32 => "threesuperior",
    0x00b4u32 => "acute",
    0x00b5u32 => "mu",
    0x00b6u32 => "paragraph",
    0x00b7u32 => "periodcentered",
    0x00b8u32 => "cedilla",
    0x00b9u32 => "onesuperior",
    0x00bau32 => "masculine",
    0x00bbu32 => "guillemotright",
    0x00bcu32 => "onequarter",
    0x00bdu32 => "onehalf",
    0x00beu32 => "threequarters",
    0x00bfu32 => "questiondown",
    0x00c0u32 => "Agrave",
    0x00c1u32 => "Aacute",
    0x00c2u32 => "Acircumflex",
    0x00c3u32 => "Atilde",
    0x00c4u32 => "Adiaeresis",
    0x00c5u32 => "Aring",
    0x00c6u32 => "AE",
    0x00c7u32 => "Ccedilla",
    0x00c8u32 => "Egrave",
    0x00c9u32 => "Eacute",
    0x00cau32 => "Ecircumflex",
    0x00cbu32 => "Ediaeresis",
    0x00ccu32 => "Igrave",
    0x00cdu32 => "Iacute",
    0x00ceu32 => "Icircumflex",
    0x00cfu32 => "Idiaeresis",
    0x00d0u32 => "ETH",
    0x00d1u32 => "Ntilde",
    0x00d2u32 => "Ograve",
    0x00d3u32 => "Oacute",
    0x00d4u32 => "Ocircumflex",
    0x00d5u32 => "Otilde",
    0x00d6u32 => "Odiaeresis",
    0x00d7u32 => "multiply",
    0x00d8u32 => "Oslash",
    0x00d9u32 => "Ugrave",
    0x00dau32 => "Uacute",
    0x00dbu32 => "Ucircumflex",
    0x00dcu32 => "Udiaeresis",
    0x00ddu32 => "Yacute",
    0x00deu32 => "THORN",
    0x00dfu32 => "ssharp",
    0x00e0u32 => "agrave",
    0x00e1u32 => "aacute",
    0x00e2u32 => "acircumflex",
    0x00e3u32 => "atilde",
    0x00e4u32 => "adiaeresis",
    0x00e5u32 => "aring",
    0x00e6u32 => "ae",
    0x00e7u32 => "ccedilla",
    0x00e8u32 => "egrave",
    0x00e9u32 => "eacute",
    0x00eau32 => "ecircumflex",
    0x00ebu32 => "ediaeresis",
    0x00ecu32 => "igrave",
    0x00edu32 => "iacute",
    0x00eeu32 => "icircumflex",
    0x00efu32 => "idiaeresis",
    0x00f0u32 => "eth",
    0x00f1u32 => "ntilde",
    0x00f2u32 => "ograve",
    0x00f3u32 => "oacute",
    0x00f4u32 => "ocircumflex",
    0x00f5u32 => "otilde",
    0x00f6u32 => "odiaeresis",
    0x00f7u32 => "division",
    0x00f8u32 => "oslash",
    0x00f9u32 => "ugrave",
    0x00fau32 => "uacute",
    0x00fbu32 => "ucircumflex",
    0x00fcu32 => "udiaeresis",
    0x00fdu32 => "yacute",
    0x00feu32 => "thorn",
    0x00ffu32 => "ydiaeresis",
    0x01a1u32 => "Aogonek",
    0x01a2u32 => "breve",
    0x01a3u32 => "Lstroke",
    0x01a5u32 => "Lcaron",
    0x01a6u32 => "Sacute",
    0x01a9u32 => "Scaron",
    0x01aau32 => "Scedilla",
    0x01abu32 => "Tcaron",
    0x01acu32 => "Zacute",
    0x01aeu32 => "Zcaron",
    0x01afu32 => "Zabovedot",
    0x01b1u32 => "aogonek",
    0x01b2u32 => "ogonek",
    0x01b3u32 => "lstroke",
    0x01b5u32 => "lcaron",
    0x01b6u32 => "sacute",
    0x01b7u32 => "caron",
    0x01b9u32 => "scaron",
    0x01bau32 => "scedilla",
    0x01bbu32 => "tcaron",
    0x01bcu32 => "zacute",
    0x01bdu32 => "doubleacute",
    0x01beu32 => "zcaron",
    0x01bfu32 => "zabovedot",
    0x01c0u32 => "Racute",
    0x01c3u32 => "Abreve",
    0x01c5u32 => "Lacute",
    0x01c6u32 => "Cacute",
    0x01c8u32 => "Ccaron",
    0x01cau32 => "Eogonek",
    0x01ccu32 => "Ecaron",
    0x01cfu32 => "Dcaron",
    0x01d0u32 => "Dstroke",
    0x01d1u32 => "Nacute",
    0x01d2u32 => "Ncaron",
    0x01d5u32 => "Odoubleacute",
    0x01d8u32 => "Rcaron",
    0x01d9u32 => "Uring",
    0x01dbu32 => "Udoubleacute",
    0x01deu32 => "Tcedilla",
    0x01e0u32 => "racute",
    0x01e3u32 => "abreve",
    0x01e5u32 => "lacute",
    0x01e6u32 => "cacute",
    0x01e8u32 => "ccaron",
    0x01eau32 => "eogonek",
    0x01ecu32 => "ecaron",
    0x01efu32 => "dcaron",
    0x01f0u32 => "dstroke",
    0x01f1u32 => "nacute",
    0x01f2u32 => "ncaron",
    0x01f5u32 => "odoubleacute",
    0x01f8u32 => "rcaron",
    0x01f9u32 => "uring",
    0x01fbu32 => "udoubleacute",
    0x01feu32 => "tcedilla",
    0x01ffu32 => "abovedot",
    0x02a1u32 => "Hstroke",
    0x02a6u32 => "Hcircumflex",
    0x02a9u32 => "Iabovedot",
    0x02abu32 => "Gbreve",
    0x02acu32 => "Jcircumflex",
    0x02b1u32 => "hstroke",
    0x02b6u32 => "hcircumflex",
    0x02b9u32 => "idotless",
    0x02bbu32 => "gbreve",
    0x02bcu32 => "jcircumflex",
    0x02c5u32 => "Cabovedot",
    0x02c6u32 => "Ccircumflex",
    0x02d5u32 => "Gabovedot",
    0x02d8u32 => "Gcircumflex",
    0x02ddu32 => "Ubreve",
    0x02deu32 => "Scircumflex",
    0x02e5u32 => "cabovedot",
    0x02e6u32 => "ccircumflex",
    0x02f5u32 => "gabovedot",
    0x02f8u32 => "gcircumflex",
    0x02fdu32 => "ubreve",
    0x02feu32 => "scircumflex",
    0x03a2u32 => "kra",
    0x03a3u32 => "Rcedilla",
    0x03a5u32 => "Itilde",
    0x03a6u32 => "Lcedilla",
    0x03aau32 => "Emacron",
    0x03abu32 => "Gcedilla",
    0x03acu32 => "Tslash",
    0x03b3u32 => "rcedilla",
    0x03b5u32 => "itilde",
    0x03b6u32 => "lcedilla",
    0x03bau32 => "emacron",
    0x03bbu32 => "gcedilla",
    0x03bcu32 => "tslash",
    0x03bdu32 => "ENG",
    0x03bfu32 => "eng",
    0x03c0u32 => "Amacron",
    0x03c7u32 => "Iogonek",
    0x03ccu32 => "Eabovedot",
    0x03cfu32 => "Imacron",
    0x03d1u32 => "Ncedilla",
    0x03d2u32 => "Omacron",
    0x03d3u32 => "Kcedilla",
    0x03d9u32 => "Uogonek",
    0x03ddu32 => "Utilde",
    0x03deu32 => "Umacron",
    0x03e0u32 => "amacron",
    0x03e7u32 => "iogonek",
    0x03ecu32 => "eabovedot",
    0x03efu32 => "imacron",
    0x03f1u32 => "ncedilla",
    0x03f2u32 => "omacron",
    0x03f3u32 => "kcedilla",
    0x03f9u32 => "uogonek",
    0x03fdu32 => "utilde",
    0x03feu32 => "umacron",
    0x06a1u32 => "Serbian_dje",
    0x06a2u32 => "Macedonia_gje",
    0x06a3u32 => "Cyrillic_io",
    0x06a4u32 => "Ukrainian_ie",
    0x06a5u32 => "Macedonia_dse",
    0x06a6u32 => "Ukrainian_i",
    0x06a7u32 => "Ukrainian_yi",
    0x06a8u32 => "Cyrillic_je",
    0x06a9u32 => "Cyrillic_lje",
    0x06aau32 => "Cyrillic_nje",
    0x06abu32 => "Serbian_tshe",
    0x06acu32 => "Macedonia_kje",
    0x06adu32 => "Ukrainian_ghe_with_upturn",
    0x06aeu32 => "Byelorussian_shortu",
    0x06afu32 => "Cyrillic_dzhe",
    0x06b0u32 => "numerosign",
    0x06b1u32 => "Serbian_DJE",
    0x06b2u32 => "Macedonia_GJE",
    0x06b3u32 => "Cyrillic_IO",
    0x06b4u32 => "Ukrainian_IE",
    0x06b5u32 => "Macedonia_DSE",
    0x06b6u32 => "Ukrainian_I",
    0x06b7u32 => "Ukrainian_YI",
    0x06b8u32 => "Cyrillic_JE",
    0x06b9u32 => "Cyrillic_LJE",
    0x06bau32 => "Cyrillic_NJE",
    0x06bbu32 => "Serbian_TSHE",
    0x06bcu32 => "Macedonia_KJE",
    0x06bdu32 => "Ukrainian_GHE_WITH_UPTURN",
    0x06beu32 => "Byelorussian_SHORTU",
    0x06bfu32 => "Cyrillic_DZHE",
    0x06c0u32 => "Cyrillic_yu",
    0x06c1u32 => "Cyrillic_a",
    0x06c2u32 => "Cyrillic_be",
    0x06c3u32 => "Cyrillic_tse",
    0x06c4u32 => "Cyrillic_de",
    0x06c5u32 => "Cyrillic_ie",
    0x06c6u32 => "Cyrillic_ef",
    0x06c7u32 => "Cyrillic_ghe",
    0x06c8u32 => "Cyrillic_ha",
    0x06c9u32 => "Cyrillic_i",
    0x06cau32 => "Cyrillic_shorti",
    0x06cbu32 => "Cyrillic_ka",
    0x06ccu32 => "Cyrillic_el",
    0x06cdu32 => "Cyrillic_em",
    0x06ceu32 => "Cyrillic_en",
    0x06cfu32 => "Cyrillic_o",
    0x06d0u32 => "Cyrillic_pe",
    0x06d1u32 => "Cyrillic_ya",
    0x06d2u32 => "Cyrillic_er",
    0x06d3u32 => "Cyrillic_es",
    0x06d4u32 => "Cyrillic_te",
    0x06d5u32 => "Cyrillic_u",
    0x06d6u32 => "Cyrillic_zhe",
    0x06d7u32 => "Cyrillic_ve",
    0x06d8u32 => "Cyrillic_softsign",
    0x06d9u32 => "Cyrillic_yeru",
    0x06dau32 => "Cyrillic_ze",
    0x06dbu32 => "Cyrillic_sha",
    0x06dcu32 => "Cyrillic_e",
    0x06ddu32 => "Cyrillic_shcha",
    0x06deu32 => "Cyrillic_che",
    0x06dfu32 => "Cyrillic_hardsign",
    0x06e0u32 => "Cyrillic_YU",
    0x06e1u32 => "Cyrillic_A",
    0x06e2u32 => "Cyrillic_BE",
    0x06e3u32 => "Cyrillic_TSE",
    0x06e4u32 => "Cyrillic_DE",
    0x06e5u32 => "Cyrillic_IE",
    0x06e6u32 => "Cyrillic_EF",
    0x06e7u32 => "Cyrillic_GHE",
    0x06e8u32 => "Cyrillic_HA",
    0x06e9u32 => "Cyrillic_I",
    0x06eau32 => "Cyrillic_SHORTI",
    0x06ebu32 => "Cyrillic_KA",
    0x06ecu32 => "Cyrillic_EL",
    0x06edu32 => "Cyrillic_EM",
    0x06eeu32 => "Cyrillic_EN",
    0x06efu32 => "Cyrillic_O",
    0x06f0u32 => "Cyrillic_PE",
    0x06f1u32 => "Cyrillic_YA",
    0x06f2u32 => "Cyrillic_ER",
    0x06f3u32 => "Cyrillic_ES",
    0x06f4u32 => "Cyrillic_TE",
    0x06f5u32 => "Cyrillic_U",
    0x06f6u32 => "Cyrillic_ZHE",
    0x06f7u32 => "Cyrillic_VE",
    0x06f8u32 => "Cyrillic_SOFTSIGN",
    0x06f9u32 => "Cyrillic_YERU",
    0x06fau32 => "Cyrillic_ZE",
    0x06fbu32 => "Cyrillic_SHA",
    0x06fcu32 => "Cyrillic_E",
    0x06fdu32 => "Cyrillic_SHCHA",
    0x06feu32 => "Cyrillic_CHE",
    0x06ffu32 => "Cyrillic_HARDSIGN",
    0x07a1u32 => "Greek_ALPHAaccent",
    0x07a2u32 => "Greek_EPSILONaccent",
    0x07a3u32 => "Greek_ETAaccent",
    0x07a4u32 => "Greek_IOTAaccent",
    0x07a5u32 => "Greek_IOTAdieresis",
    0x07a7u32 => "Greek_OMICRONaccent",
    0x07a8u32 => "Greek_UPSILONaccent",
    0x07a9u32 => "Greek_UPSILONdieresis",
    0x07abu32 => "Greek_OMEGAaccent",
    0x07aeu32 => "Greek_accentdieresis",
    0x07afu32 => "Greek_horizbar",
    0x07b1u32 => "Greek_alphaaccent",
    0x07b2u32 => "Greek_epsilonaccent",
    0x07b3u32 => "Greek_etaaccent",
    0x07b4u32 => "Greek_iotaaccent",
    0x07b5u32 => "Greek_iotadieresis",
    0x07b6u32 => "Greek_iotaaccentdieresis",
    0x07b7u32 => "Greek_omicronaccent",
    0x07b8u32 => "Greek_upsilonaccent",
    0x07b9u32 => "Greek_upsilondieresis",
    0x07bau32 => "Greek_upsilonaccentdieresis",
    0x07bbu32 => "Greek_omegaaccent",
    0x07c1u32 => "Greek_ALPHA",
    0x07c2u32 => "Greek_BETA",
    0x07c3u32 => "Greek_GAMMA",
    0x07c4u32 => "Greek_DELTA",
    0x07c5u32 => "Greek_EPSILON",
    0x07c6u32 => "Greek_ZETA",
    0x07c7u32 => "Greek_ETA",
    0x07c8u32 => "Greek_THETA",
    0x07c9u32 => "Greek_IOTA",
    0x07cau32 => "Greek_KAPPA",
    0x07cbu32 => "Greek_LAMDA",
    0x07ccu32 => "Greek_MU",
    0x07cdu32 => "Greek_NU",
    0x07ceu32 => "Greek_XI",
    0x07cfu32 => "Greek_OMICRON",
    0x07d0u32 => "Greek_PI",
    0x07d1u32 => "Greek_RHO",
    0x07d2u32 => "Greek_SIGMA",
    0x07d4u32 => "Greek_TAU",
    0x07d5u32 => "Greek_UPSILON",
    0x07d6u32 => "Greek_PHI",
    0x07d7u32 => "Greek_CHI",
    0x07d8u32 => "Greek_PSI",
    0x07d9u32 => "Greek_OMEGA",
    0x07e1u32 => "Greek_alpha",
    0x07e2u32 => "Greek_beta",
    0x07e3u32 => "Greek_gamma",
    0x07e4u32 => "Greek_delta",
    0x07e5u32 => "Greek_epsilon",
    0x07e6u32 => "Greek_zeta",
    0x07e7u32 => "Greek_eta",
    0x07e8u32 => "Greek_theta",
    0x07e9u32 => "Greek_iota",
    0x07eau32 => "Greek_kappa",
    0x07ebu32 => "Greek_lamda",
    0x07ecu32 => "Greek_mu",
    0x07edu32 => "Greek_nu",
    0x07eeu32 => "Greek_xi",
    0x07efu32 => "Greek_omicron",
    0x07f0u32 => "Greek_pi",
    0x07f1u32 => "Greek_rho",
    0x07f2u32 => "Greek_sigma",
    0x07f3u32 => "Greek_finalsmallsigma",
    0x07f4u32 => "Greek_tau",
    0x07f5u32 => "Greek_upsilon",
    0x07f6u32 => "Greek_phi",
    0x07f7u32 => "Greek_chi",
    0x07f8u32 => "Greek_psi",
    0x07f9u32 => "Greek_omega",
    0x13bcu32 => "OE",
    0x13bdu32 => "oe",
    0x13beu32 => "Ydiaeresis",
    0x20acu32 => "EuroSign",
    0xfe03u32 => "ISO_Level3_Shift",
    0xfe34u32 => "ISO_Enter",
    0xfe50u32 => "dead_grave",
    0xfe51u32 => "dead_acute",
    0xfe52u32 => "dead_circumflex",
    0xfe53u32 => "dead_tilde",
    0xfe54u32 => "dead_macron",
    0xfe55u32 => "dead_breve",
    0xfe56u32 => "dead_abovedot",
    0xfe57u32 => "dead_diaeresis",
    0xfe58u32 => "dead_abovering",
    0xfe59u32 => "dead_doubleacute",
    0xfe5au32 => "dead_caron",
    0xfe5bu32 => "dead_cedilla",
    0xfe5cu32 => "dead_ogonek",
    0xfe5du32 => "dead_iota",
    0xfe5eu32 => "dead_voiced_sound",
    0xfe5fu32 => "dead_semivoiced_sound",
    0xfe60u32 => "dead_belowdot",
    0xfe61u32 => "dead_hook",
    0xfe62u32 => "dead_horn",
    0xfe63u32 => "dead_stroke",
    0xfe64u32 => "dead_abovecomma",
    0xfe65u32 => "dead_abovereversedcomma",
    0xfe66u32 => "dead_doublegrave",
    0xff08u32 => "BackSpace",
    0xff09u32 => "Tab",
    0xff0du32 => "Return",
    0xff1bu32 => "Escape",
    0xff20u32 => "Multi_key",
    0xff50u32 => "Home",
    0xff51u32 => "Left",
    0xff52u32 => "Up",
    0xff53u32 => "Right",
    0xff54u32 => "Down",
    0xff55u32 => "Page_Up",
    0xff56u32 => "Page_Down",
    0xff57u32 => "End",
    0xff63u32 => "Insert",
    0xff7eu32 => "Mode_switch",
    0xff80u32 => "KP_Space",
    0xff89u32 => "KP_Tab",
    0xff8du32 => "KP_Enter",
    0xffaau32 => "KP_Multiply",
    0xffabu32 => "KP_Add",
    0xffacu32 => "KP_Separator",
    0xffadu32 => "KP_Subtract",
    0xffaeu32 => "KP_Decimal",
    0xffafu32 => "KP_Divide",
    0xffb0u32 => "KP_0",
    0xffb1u32 => "KP_1",
    0xffb2u32 => "KP_2",
    0xffb3u32 => "KP_3",
    0xffb4u32 => "KP_4",
    0xffb5u32 => "KP_5",
    0xffb6u32 => "KP_6",
    0xffb7u32 => "KP_7",
    0xffb8u32 => "KP_8",
    0xffb9u32 => "KP_9",
    0xffbdu32 => "KP_Equal",
    0xffe1u32 => "Shift_L",
    0xffe2u32 => "Shift_R",
    0xffe3u32 => "Control_L",
    0xffe4u32 => "Control_R",
    0xffe5u32 => "Caps_Lock",
    0xffe6u32 => "Shift_Lock",
    0xffe7u32 => "Meta_L",
    0xffe8u32 => "Meta_R",
    0xffe9u32 => "Alt_L",
    0xffeau32 => "Alt_R",
    0xffebu32 => "Super_L",
    0xffecu32 => "Super_R",
    0xffedu32 => "Hyper_L",
    0xffeeu32 => "Hyper_R",
    0xffffu32 => "Delete",
};

/// Legacy Latin-2/3/4/9, Cyrillic and Greek keysyms with their code points.
pub(crate) static LEGACY_KEYSYM_TO_UNICODE: &[(u16, u16)] = &[
    (0x01a1, 0x0104),
    (0x01a2, 0x02d8),
    (0x01a3, 0x0141),
    (0x01a5, 0x013d),
    (0x01a6, 0x015a),
    (0x01a9, 0x0160),
    (0x01aa, 0x015e),
    (0x01ab, 0x0164),
    (0x01ac, 0x0179),
    (0x01ae, 0x017d),
    (0x01af, 0x017b),
    (0x01b1, 0x0105),
    (0x01b2, 0x02db),
    (0x01b3, 0x0142),
    (0x01b5, 0x013e),
    (0x01b6, 0x015b),
    (0x01b7, 0x02c7),
    (0x01b9, 0x0161),
    (0x01ba, 0x015f),
    (0x01bb, 0x0165),
    (0x01bc, 0x017a),
    (0x01bd, 0x02dd),
    (0x01be, 0x017e),
    (0x01bf, 0x017c),
    (0x01c0, 0x0154),
    (0x01c3, 0x0102),
    (0x01c5, 0x0139),
    (0x01c6, 0x0106),
    (0x01c8, 0x010c),
    (0x01ca, 0x0118),
    (0x01cc, 0x011a),
    (0x01cf, 0x010e),
    (0x01d0, 0x0110),
    (0x01d1, 0x0143),
    (0x01d2, 0x0147),
    (0x01d5, 0x0150),
    (0x01d8, 0x0158),
    (0x01d9, 0x016e),
    (0x01db, 0x0170),
    (0x01de, 0x0162),
    (0x01e0, 0x0155),
    (0x01e3, 0x0103),
    (0x01e5, 0x013a),
    (0x01e6, 0x0107),
    (0x01e8, 0x010d),
    (0x01ea, 0x0119),
    (0x01ec, 0x011b),
    (0x01ef, 0x010f),
    (0x01f0, 0x0111),
    (0x01f1, 0x0144),
    (0x01f2, 0x0148),
    (0x01f5, 0x0151),
    (0x01f8, 0x0159),
    (0x01f9, 0x016f),
    (0x01fb, 0x0171),
    (0x01fe, 0x0163),
    (0x01ff, 0x02d9),
    (0x02a1, 0x0126),
    (0x02a6, 0x0124),
    (0x02a9, 0x0130),
    (0x02ab, 0x011e),
    (0x02ac, 0x0134),
    (0x02b1, 0x0127),
    (0x02b6, 0x0125),
    (0x02b9, 0x0131),
    (0x02bb, 0x011f),
    (0x02bc, 0x0135),
    (0x02c5, 0x010a),
    (0x02c6, 0x0108),
    (0x02d5, 0x0120),
    (0x02d8, 0x011c),
    (0x02dd, 0x016c),
    (0x02de, 0x015c),
    (0x02e5, 0x010b),
    (0x02e6, 0x0109),
    (0x02f5, 0x0121),
    (0x02f8, 0x011d),
    (0x02fd, 0x016d),
    (0x02fe, 0x015d),
    (0x03a2, 0x0138),
    (0x03a3, 0x0156),
    (0x03a5, 0x0128),
    (0x03a6, 0x013b),
    (0x03aa, 0x0112),
    (0x03ab, 0x0122),
    (0x03ac, 0x0166),
    (0x03b3, 0x0157),
    (0x03b5, 0x0129),
    (0x03b6, 0x013c),
    (0x03ba, 0x0113),
    (0x03bb, 0x0123),
    (0x03bc, 0x0167),
    (0x03bd, 0x014a),
    (0x03bf, 0x014b),
    (0x03c0, 0x0100),
    (0x03c7, 0x012e),
    (0x03cc, 0x0116),
    (0x03cf, 0x012a),
    (0x03d1, 0x0145),
    (0x03d2, 0x014c),
    (0x03d3, 0x0136),
    (0x03d9, 0x0172),
    (0x03dd, 0x0168),
    (0x03de, 0x016a),
    (0x03e0, 0x0101),
    (0x03e7, 0x012f),
    (0x03ec, 0x0117),
    (0x03ef, 0x012b),
    (0x03f1, 0x0146),
    (0x03f2, 0x014d),
    (0x03f3, 0x0137),
    (0x03f9, 0x0173),
    (0x03fd, 0x0169),
    (0x03fe, 0x016b),
    (0x06a1, 0x0452),
    (0x06a2, 0x0453),
    (0x06a3, 0x0451),
    (0x06a4, 0x0454),
    (0x06a5, 0x0455),
    (0x06a6, 0x0456),
    (0x06a7, 0x0457),
    (0x06a8, 0x0458),
    (0x06a9, 0x0459),
    (0x06aa, 0x045a),
    (0x06ab, 0x045b),
    (0x06ac, 0x045c),
    (0x06ad, 0x0491),
    (0x06ae, 0x045e),
    (0x06af, 0x045f),
    (0x06b0, 0x2116),
    (0x06b1, 0x0402),
    (0x06b2, 0x0403),
    (0x06b3, 0x0401),
    (0x06b4, 0x0404),
    (0x06b5, 0x0405),
    (0x06b6, 0x0406),
    (0x06b7, 0x0407),
    (0x06b8, 0x0408),
    (0x06b9, 0x0409),
    (0x06ba, 0x040a),
    (0x06bb, 0x040b),
    (0x06bc, 0x040c),
    (0x06bd, 0x0490),
    (0x06be, 0x040e),
    (0x06bf, 0x040f),
    (0x06c0, 0x044e),
    (0x06c1, 0x0430),
    (0x06c2, 0x0431),
    (0x06c3, 0x0446),
    (0x06c4, 0x0434),
    (0x06c5, 0x0435),
    (0x06c6, 0x0444),
    (0x06c7, 0x0433),
    (0x06c8, 0x0445),
    (0x06c9, 0x0438),
    (0x06ca, 0x0439),
    (0x06cb, 0x043a),
    (0x06cc, 0x043b),
    (0x06cd, 0x043c),
    (0x06ce, 0x043d),
    (0x06cf, 0x043e),
    (0x06d0, 0x043f),
    (0x06d1, 0x044f),
    (0x06d2, 0x0440),
    (0x06d3, 0x0441),
    (0x06d4, 0x0442),
    (0x06d5, 0x0443),
    (0x06d6, 0x0436),
    (0x06d7, 0x0432),
    (0x06d8, 0x044c),
    (0x06d9, 0x044b),
    (0x06da, 0x0437),
    (0x06db, 0x0448),
    (0x06dc, 0x044d),
    (0x06dd, 0x0449),
    (0x06de, 0x0447),
    (0x06df, 0x044a),
    (0x06e0, 0x042e),
    (0x06e1, 0x0410),
    (0x06e2, 0x0411),
    (0x06e3, 0x0426),
    (0x06e4, 0x0414),
    (0x06e5, 0x0415),
    (0x06e6, 0x0424),
    (0x06e7, 0x0413),
    (0x06e8, 0x0425),
    (0x06e9, 0x0418),
    (0x06ea, 0x0419),
    (0x06eb, 0x041a),
    (0x06ec, 0x041b),
    (0x06ed, 0x041c),
    (0x06ee, 0x041d),
    (0x06ef, 0x041e),
    (0x06f0, 0x041f),
    (0x06f1, 0x042f),
    (0x06f2, 0x0420),
    (0x06f3, 0x0421),
    (0x06f4, 0x0422),
    (0x06f5, 0x0423),
    (0x06f6, 0x0416),
    (0x06f7, 0x0412),
    (0x06f8, 0x042c),
    (0x06f9, 0x042b),
    (0x06fa, 0x0417),
    (0x06fb, 0x0428),
    (0x06fc, 0x042d),
    (0x06fd, 0x0429),
    (0x06fe, 0x0427),
    (0x06ff, 0x042a),
    (0x07a1, 0x0386),
    (0x07a2, 0x0388),
    (0x07a3, 0x0389),
    (0x07a4, 0x038a),
    (0x07a5, 0x03aa),
    (0x07a7, 0x038c),
    (0x07a8, 0x038e),
    (0x07a9, 0x03ab),
    (0x07ab, 0x038f),
    (0x07ae, 0x0385),
    (0x07af, 0x2015),
    (0x07b1, 0x03ac),
    (0x07b2, 0x03ad),
    (0x07b3, 0x03ae),
    (0x07b4, 0x03af),
    (0x07b5, 0x03ca),
    (0x07b6, 0x0390),
    (0x07b7, 0x03cc),
    (0x07b8, 0x03cd),
    (0x07b9, 0x03cb),
    (0x07ba, 0x03b0),
    (0x07bb, 0x03ce),
    (0x07c1, 0x0391),
    (0x07c2, 0x0392),
    (0x07c3, 0x0393),
    (0x07c4, 0x0394),
    (0x07c5, 0x0395),
    (0x07c6, 0x0396),
    (0x07c7, 0x0397),
    (0x07c8, 0x0398),
    (0x07c9, 0x0399),
    (0x07ca, 0x039a),
    (0x07cb, 0x039b),
    (0x07cc, 0x039c),
    (0x07cd, 0x039d),
    (0x07ce, 0x039e),
    (0x07cf, 0x039f),
    (0x07d0, 0x03a0),
    (0x07d1, 0x03a1),
    (0x07d2, 0x03a3),
    (0x07d4, 0x03a4),
    (0x07d5, 0x03a5),
    (0x07d6, 0x03a6),
    (0x07d7, 0x03a7),
    (0x07d8, 0x03a8),
    (0x07d9, 0x03a9),
    (0x07e1, 0x03b1),
    (0x07e2, 0x03b2),
    (0x07e3, 0x03b3),
    (0x07e4, 0x03b4),
    (0x07e5, 0x03b5),
    (0x07e6, 0x03b6),
    (0x07e7, 0x03b7),
    (0x07e8, 0x03b8),
    (0x07e9, 0x03b9),
    (0x07ea, 0x03ba),
    (0x07eb, 0x03bb),
    (0x07ec, 0x03bc),
    (0x07ed, 0x03bd),
    (0x07ee, 0x03be),
    (0x07ef, 0x03bf),
    (0x07f0, 0x03c0),
    (0x07f1, 0x03c1),
    (0x07f2, 0x03c3),
    (0x07f3, 0x03c2),
    (0x07f4, 0x03c4),
    (0x07f5, 0x03c5),
    (0x07f6, 0x03c6),
    (0x07f7, 0x03c7),
    (0x07f8, 0x03c8),
    (0x07f9, 0x03c9),
    (0x13bc, 0x0152),
    (0x13bd, 0x0153),
    (0x13be, 0x0178),
    (0x20ac, 0x20ac),
];
