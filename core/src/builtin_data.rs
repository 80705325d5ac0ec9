//! Generated compose sequences for the built-in compact table.
//!
//! Extracted from the X.Org en_US.UTF-8 Compose file: dead key + key pairs
//! and the Multi_key sequences producing Latin-1, Latin Extended-A,
//! punctuation, currency and fraction characters.

pub(crate) static BUILTIN_SEQUENCES: &[(&[u16], u16)] = &[
    (&[0xfe50, 0x0020], 0x0060), (&[0xfe50, 0x0041], 0x00c0), (&[0xfe50, 0x0045], 0x00c8),
    (&[0xfe50, 0x0049], 0x00cc), (&[0xfe50, 0x004e], 0x01f8), (&[0xfe50, 0x004f], 0x00d2),
    (&[0xfe50, 0x0055], 0x00d9), (&[0xfe50, 0x0056], 0x01db), (&[0xfe50, 0x0057], 0x1e80),
    (&[0xfe50, 0x0059], 0x1ef2), (&[0xfe50, 0x0061], 0x00e0), (&[0xfe50, 0x0065], 0x00e8),
    (&[0xfe50, 0x0069], 0x00ec), (&[0xfe50, 0x006e], 0x01f9), (&[0xfe50, 0x006f], 0x00f2),
    (&[0xfe50, 0x0075], 0x00f9), (&[0xfe50, 0x0076], 0x01dc), (&[0xfe50, 0x0077], 0x1e81),
    (&[0xfe50, 0x0079], 0x1ef3), (&[0xfe50, 0xfe50], 0x0060), (&[0xfe51, 0x0020], 0x0027),
    (&[0xfe51, 0x0041], 0x00c1), (&[0xfe51, 0x0043], 0x0106), (&[0xfe51, 0x0045], 0x00c9),
    (&[0xfe51, 0x0047], 0x01f4), (&[0xfe51, 0x0049], 0x00cd), (&[0xfe51, 0x004b], 0x1e30),
    (&[0xfe51, 0x004c], 0x0139), (&[0xfe51, 0x004d], 0x1e3e), (&[0xfe51, 0x004e], 0x0143),
    (&[0xfe51, 0x004f], 0x00d3), (&[0xfe51, 0x0050], 0x1e54), (&[0xfe51, 0x0052], 0x0154),
    (&[0xfe51, 0x0053], 0x015a), (&[0xfe51, 0x0055], 0x00da), (&[0xfe51, 0x0056], 0x01d7),
    (&[0xfe51, 0x0057], 0x1e82), (&[0xfe51, 0x0059], 0x00dd), (&[0xfe51, 0x005a], 0x0179),
    (&[0xfe51, 0x0061], 0x00e1), (&[0xfe51, 0x0063], 0x0107), (&[0xfe51, 0x0065], 0x00e9),
    (&[0xfe51, 0x0067], 0x01f5), (&[0xfe51, 0x0069], 0x00ed), (&[0xfe51, 0x006b], 0x1e31),
    (&[0xfe51, 0x006c], 0x013a), (&[0xfe51, 0x006d], 0x1e3f), (&[0xfe51, 0x006e], 0x0144),
    (&[0xfe51, 0x006f], 0x00f3), (&[0xfe51, 0x0070], 0x1e55), (&[0xfe51, 0x0072], 0x0155),
    (&[0xfe51, 0x0073], 0x015b), (&[0xfe51, 0x0075], 0x00fa), (&[0xfe51, 0x0076], 0x01d8),
    (&[0xfe51, 0x0077], 0x1e83), (&[0xfe51, 0x0079], 0x00fd), (&[0xfe51, 0x007a], 0x017a),
    (&[0xfe51, 0xfe51], 0x00b4), (&[0xfe52, 0x0020], 0x005e), (&[0xfe52, 0x0028], 0x207d),
    (&[0xfe52, 0x0029], 0x207e), (&[0xfe52, 0x002b], 0x207a), (&[0xfe52, 0x002d], 0x207b),
    (&[0xfe52, 0x002e], 0x00b7), (&[0xfe52, 0x0030], 0x2070), (&[0xfe52, 0x0031], 0x00b9),
    (&[0xfe52, 0x0032], 0x00b2), (&[0xfe52, 0x0033], 0x00b3), (&[0xfe52, 0x0034], 0x2074),
    (&[0xfe52, 0x0035], 0x2075), (&[0xfe52, 0x0036], 0x2076), (&[0xfe52, 0x0037], 0x2077),
    (&[0xfe52, 0x0038], 0x2078), (&[0xfe52, 0x0039], 0x2079), (&[0xfe52, 0x003d], 0x207c),
    (&[0xfe52, 0x0041], 0x00c2), (&[0xfe52, 0x0043], 0x0108), (&[0xfe52, 0x0045], 0x00ca),
    (&[0xfe52, 0x0047], 0x011c), (&[0xfe52, 0x0048], 0x0124), (&[0xfe52, 0x0049], 0x00ce),
    (&[0xfe52, 0x004a], 0x0134), (&[0xfe52, 0x004f], 0x00d4), (&[0xfe52, 0x0053], 0x015c),
    (&[0xfe52, 0x0055], 0x00db), (&[0xfe52, 0x0057], 0x0174), (&[0xfe52, 0x0059], 0x0176),
    (&[0xfe52, 0x005a], 0x1e90), (&[0xfe52, 0x0061], 0x00e2), (&[0xfe52, 0x0063], 0x0109),
    (&[0xfe52, 0x0065], 0x00ea), (&[0xfe52, 0x0067], 0x011d), (&[0xfe52, 0x0068], 0x0125),
    (&[0xfe52, 0x0069], 0x00ee), (&[0xfe52, 0x006a], 0x0135), (&[0xfe52, 0x006f], 0x00f4),
    (&[0xfe52, 0x0073], 0x015d), (&[0xfe52, 0x0075], 0x00fb), (&[0xfe52, 0x0077], 0x0175),
    (&[0xfe52, 0x0079], 0x0177), (&[0xfe52, 0x007a], 0x1e91), (&[0xfe52, 0xfe52], 0x005e),
    (&[0xfe53, 0x0020], 0x007e), (&[0xfe53, 0x003c], 0x2272), (&[0xfe53, 0x003d], 0x2243),
    (&[0xfe53, 0x003e], 0x2273), (&[0xfe53, 0x0041], 0x00c3), (&[0xfe53, 0x0045], 0x1ebc),
    (&[0xfe53, 0x0049], 0x0128), (&[0xfe53, 0x004e], 0x00d1), (&[0xfe53, 0x004f], 0x00d5),
    (&[0xfe53, 0x0055], 0x0168), (&[0xfe53, 0x0056], 0x1e7c), (&[0xfe53, 0x0059], 0x1ef8),
    (&[0xfe53, 0x0061], 0x00e3), (&[0xfe53, 0x0065], 0x1ebd), (&[0xfe53, 0x0069], 0x0129),
    (&[0xfe53, 0x006e], 0x00f1), (&[0xfe53, 0x006f], 0x00f5), (&[0xfe53, 0x0075], 0x0169),
    (&[0xfe53, 0x0076], 0x1e7d), (&[0xfe53, 0x0079], 0x1ef9), (&[0xfe53, 0xfe53], 0x007e),
    (&[0xfe54, 0x0020], 0x00af), (&[0xfe54, 0x0041], 0x0100), (&[0xfe54, 0x0045], 0x0112),
    (&[0xfe54, 0x0047], 0x1e20), (&[0xfe54, 0x0049], 0x012a), (&[0xfe54, 0x004f], 0x014c),
    (&[0xfe54, 0x0055], 0x016a), (&[0xfe54, 0x0056], 0x01d5), (&[0xfe54, 0x0059], 0x0232),
    (&[0xfe54, 0x0061], 0x0101), (&[0xfe54, 0x0065], 0x0113), (&[0xfe54, 0x0067], 0x1e21),
    (&[0xfe54, 0x0069], 0x012b), (&[0xfe54, 0x006f], 0x014d), (&[0xfe54, 0x0075], 0x016b),
    (&[0xfe54, 0x0076], 0x01d6), (&[0xfe54, 0x0079], 0x0233), (&[0xfe54, 0xfe54], 0x00af),
    (&[0xfe55, 0x0020], 0x02d8), (&[0xfe55, 0x0041], 0x0102), (&[0xfe55, 0x0045], 0x0114),
    (&[0xfe55, 0x0047], 0x011e), (&[0xfe55, 0x0049], 0x012c), (&[0xfe55, 0x004f], 0x014e),
    (&[0xfe55, 0x0055], 0x016c), (&[0xfe55, 0x0061], 0x0103), (&[0xfe55, 0x0065], 0x0115),
    (&[0xfe55, 0x0067], 0x011f), (&[0xfe55, 0x0069], 0x012d), (&[0xfe55, 0x006f], 0x014f),
    (&[0xfe55, 0x0075], 0x016d), (&[0xfe55, 0xfe55], 0x02d8), (&[0xfe56, 0x0020], 0x02d9),
    (&[0xfe56, 0x0041], 0x0226), (&[0xfe56, 0x0042], 0x1e02), (&[0xfe56, 0x0043], 0x010a),
    (&[0xfe56, 0x0044], 0x1e0a), (&[0xfe56, 0x0045], 0x0116), (&[0xfe56, 0x0046], 0x1e1e),
    (&[0xfe56, 0x0047], 0x0120), (&[0xfe56, 0x0048], 0x1e22), (&[0xfe56, 0x0049], 0x0130),
    (&[0xfe56, 0x004c], 0x013f), (&[0xfe56, 0x004d], 0x1e40), (&[0xfe56, 0x004e], 0x1e44),
    (&[0xfe56, 0x004f], 0x022e), (&[0xfe56, 0x0050], 0x1e56), (&[0xfe56, 0x0052], 0x1e58),
    (&[0xfe56, 0x0053], 0x1e60), (&[0xfe56, 0x0054], 0x1e6a), (&[0xfe56, 0x0057], 0x1e86),
    (&[0xfe56, 0x0058], 0x1e8a), (&[0xfe56, 0x0059], 0x1e8e), (&[0xfe56, 0x005a], 0x017b),
    (&[0xfe56, 0x0061], 0x0227), (&[0xfe56, 0x0062], 0x1e03), (&[0xfe56, 0x0063], 0x010b),
    (&[0xfe56, 0x0064], 0x1e0b), (&[0xfe56, 0x0065], 0x0117), (&[0xfe56, 0x0066], 0x1e1f),
    (&[0xfe56, 0x0067], 0x0121), (&[0xfe56, 0x0068], 0x1e23), (&[0xfe56, 0x0069], 0x0131),
    (&[0xfe56, 0x006a], 0x0237), (&[0xfe56, 0x006c], 0x0140), (&[0xfe56, 0x006d], 0x1e41),
    (&[0xfe56, 0x006e], 0x1e45), (&[0xfe56, 0x006f], 0x022f), (&[0xfe56, 0x0070], 0x1e57),
    (&[0xfe56, 0x0072], 0x1e59), (&[0xfe56, 0x0073], 0x1e61), (&[0xfe56, 0x0074], 0x1e6b),
    (&[0xfe56, 0x0077], 0x1e87), (&[0xfe56, 0x0078], 0x1e8b), (&[0xfe56, 0x0079], 0x1e8f),
    (&[0xfe56, 0x007a], 0x017c), (&[0xfe56, 0xfe56], 0x02d9), (&[0xfe57, 0x0020], 0x0022),
    (&[0xfe57, 0x0027], 0x0344), (&[0xfe57, 0x0041], 0x00c4), (&[0xfe57, 0x0045], 0x00cb),
    (&[0xfe57, 0x0048], 0x1e26), (&[0xfe57, 0x0049], 0x00cf), (&[0xfe57, 0x004f], 0x00d6),
    (&[0xfe57, 0x0055], 0x00dc), (&[0xfe57, 0x0057], 0x1e84), (&[0xfe57, 0x0058], 0x1e8c),
    (&[0xfe57, 0x0059], 0x0178), (&[0xfe57, 0x0061], 0x00e4), (&[0xfe57, 0x0065], 0x00eb),
    (&[0xfe57, 0x0068], 0x1e27), (&[0xfe57, 0x0069], 0x00ef), (&[0xfe57, 0x006f], 0x00f6),
    (&[0xfe57, 0x0074], 0x1e97), (&[0xfe57, 0x0075], 0x00fc), (&[0xfe57, 0x0077], 0x1e85),
    (&[0xfe57, 0x0078], 0x1e8d), (&[0xfe57, 0x0079], 0x00ff), (&[0xfe57, 0xfe57], 0x00a8),
    (&[0xfe58, 0x0020], 0x00b0), (&[0xfe58, 0x0041], 0x00c5), (&[0xfe58, 0x0055], 0x016e),
    (&[0xfe58, 0x0061], 0x00e5), (&[0xfe58, 0x0075], 0x016f), (&[0xfe58, 0x0077], 0x1e98),
    (&[0xfe58, 0x0079], 0x1e99), (&[0xfe58, 0xfe58], 0x00b0), (&[0xfe59, 0x0020], 0x02dd),
    (&[0xfe59, 0x004f], 0x0150), (&[0xfe59, 0x0055], 0x0170), (&[0xfe59, 0x006f], 0x0151),
    (&[0xfe59, 0x0075], 0x0171), (&[0xfe59, 0xfe59], 0x02dd), (&[0xfe5a, 0x0020], 0x02c7),
    (&[0xfe5a, 0x0028], 0x208d), (&[0xfe5a, 0x0029], 0x208e), (&[0xfe5a, 0x002b], 0x208a),
    (&[0xfe5a, 0x002d], 0x208b), (&[0xfe5a, 0x0030], 0x2080), (&[0xfe5a, 0x0031], 0x2081),
    (&[0xfe5a, 0x0032], 0x2082), (&[0xfe5a, 0x0033], 0x2083), (&[0xfe5a, 0x0034], 0x2084),
    (&[0xfe5a, 0x0035], 0x2085), (&[0xfe5a, 0x0036], 0x2086), (&[0xfe5a, 0x0037], 0x2087),
    (&[0xfe5a, 0x0038], 0x2088), (&[0xfe5a, 0x0039], 0x2089), (&[0xfe5a, 0x003d], 0x208c),
    (&[0xfe5a, 0x0041], 0x01cd), (&[0xfe5a, 0x0043], 0x010c), (&[0xfe5a, 0x0044], 0x010e),
    (&[0xfe5a, 0x0045], 0x011a), (&[0xfe5a, 0x0047], 0x01e6), (&[0xfe5a, 0x0048], 0x021e),
    (&[0xfe5a, 0x0049], 0x01cf), (&[0xfe5a, 0x004b], 0x01e8), (&[0xfe5a, 0x004c], 0x013d),
    (&[0xfe5a, 0x004e], 0x0147), (&[0xfe5a, 0x004f], 0x01d1), (&[0xfe5a, 0x0052], 0x0158),
    (&[0xfe5a, 0x0053], 0x0160), (&[0xfe5a, 0x0054], 0x0164), (&[0xfe5a, 0x0055], 0x01d3),
    (&[0xfe5a, 0x0056], 0x01d9), (&[0xfe5a, 0x005a], 0x017d), (&[0xfe5a, 0x0061], 0x01ce),
    (&[0xfe5a, 0x0063], 0x010d), (&[0xfe5a, 0x0064], 0x010f), (&[0xfe5a, 0x0065], 0x011b),
    (&[0xfe5a, 0x0067], 0x01e7), (&[0xfe5a, 0x0068], 0x021f), (&[0xfe5a, 0x0069], 0x01d0),
    (&[0xfe5a, 0x006a], 0x01f0), (&[0xfe5a, 0x006b], 0x01e9), (&[0xfe5a, 0x006c], 0x013e),
    (&[0xfe5a, 0x006e], 0x0148), (&[0xfe5a, 0x006f], 0x01d2), (&[0xfe5a, 0x0072], 0x0159),
    (&[0xfe5a, 0x0073], 0x0161), (&[0xfe5a, 0x0074], 0x0165), (&[0xfe5a, 0x0075], 0x01d4),
    (&[0xfe5a, 0x0076], 0x01da), (&[0xfe5a, 0x007a], 0x017e), (&[0xfe5a, 0xfe5a], 0x02c7),
    (&[0xfe5b, 0x0020], 0x00b8), (&[0xfe5b, 0x0043], 0x00c7), (&[0xfe5b, 0x0044], 0x1e10),
    (&[0xfe5b, 0x0045], 0x0228), (&[0xfe5b, 0x0047], 0x0122), (&[0xfe5b, 0x0048], 0x1e28),
    (&[0xfe5b, 0x004b], 0x0136), (&[0xfe5b, 0x004c], 0x013b), (&[0xfe5b, 0x004e], 0x0145),
    (&[0xfe5b, 0x0052], 0x0156), (&[0xfe5b, 0x0053], 0x015e), (&[0xfe5b, 0x0054], 0x0162),
    (&[0xfe5b, 0x0063], 0x00e7), (&[0xfe5b, 0x0064], 0x1e11), (&[0xfe5b, 0x0065], 0x0229),
    (&[0xfe5b, 0x0067], 0x0123), (&[0xfe5b, 0x0068], 0x1e29), (&[0xfe5b, 0x006b], 0x0137),
    (&[0xfe5b, 0x006c], 0x013c), (&[0xfe5b, 0x006e], 0x0146), (&[0xfe5b, 0x0072], 0x0157),
    (&[0xfe5b, 0x0073], 0x015f), (&[0xfe5b, 0x0074], 0x0163), (&[0xfe5b, 0xfe5b], 0x00b8),
    (&[0xfe5c, 0x0020], 0x02db), (&[0xfe5c, 0x0041], 0x0104), (&[0xfe5c, 0x0045], 0x0118),
    (&[0xfe5c, 0x0049], 0x012e), (&[0xfe5c, 0x004f], 0x01ea), (&[0xfe5c, 0x0055], 0x0172),
    (&[0xfe5c, 0x0061], 0x0105), (&[0xfe5c, 0x0065], 0x0119), (&[0xfe5c, 0x0069], 0x012f),
    (&[0xfe5c, 0x006f], 0x01eb), (&[0xfe5c, 0x0075], 0x0173), (&[0xfe5c, 0xfe5c], 0x02db),
    (&[0xff20, 0x0020, 0x0020], 0x00a0), (&[0xff20, 0x0020, 0x002c], 0x00b8), (&[0xff20, 0x0020, 0x005f], 0x00af),
    (&[0xff20, 0x0021, 0x0021], 0x00a1), (&[0xff20, 0x0021, 0x003f], 0x203d), (&[0xff20, 0x0021, 0x005e], 0x00a6),
    (&[0xff20, 0x0022, 0x0020], 0x00a8), (&[0xff20, 0x0022, 0x0022], 0x00a8), (&[0xff20, 0x0022, 0x002c], 0x201e),
    (&[0xff20, 0x0022, 0x003c], 0x201c), (&[0xff20, 0x0022, 0x003e], 0x201d), (&[0xff20, 0x0022, 0x0041], 0x00c4),
    (&[0xff20, 0x0022, 0x0045], 0x00cb), (&[0xff20, 0x0022, 0x0049], 0x00cf), (&[0xff20, 0x0022, 0x004f], 0x00d6),
    (&[0xff20, 0x0022, 0x0055], 0x00dc), (&[0xff20, 0x0022, 0x0059], 0x0178), (&[0xff20, 0x0022, 0x0061], 0x00e4),
    (&[0xff20, 0x0022, 0x0065], 0x00eb), (&[0xff20, 0x0022, 0x0069], 0x00ef), (&[0xff20, 0x0022, 0x006f], 0x00f6),
    (&[0xff20, 0x0022, 0x0075], 0x00fc), (&[0xff20, 0x0022, 0x0079], 0x00ff), (&[0xff20, 0x0025, 0x006f], 0x2030),
    (&[0xff20, 0x0027, 0x0027], 0x00b4), (&[0xff20, 0x0027, 0x002c], 0x201a), (&[0xff20, 0x0027, 0x003c], 0x2018),
    (&[0xff20, 0x0027, 0x003e], 0x2019), (&[0xff20, 0x0027, 0x0041], 0x00c1), (&[0xff20, 0x0027, 0x0043], 0x0106),
    (&[0xff20, 0x0027, 0x0045], 0x00c9), (&[0xff20, 0x0027, 0x0049], 0x00cd), (&[0xff20, 0x0027, 0x004c], 0x0139),
    (&[0xff20, 0x0027, 0x004e], 0x0143), (&[0xff20, 0x0027, 0x004f], 0x00d3), (&[0xff20, 0x0027, 0x0052], 0x0154),
    (&[0xff20, 0x0027, 0x0053], 0x015a), (&[0xff20, 0x0027, 0x0055], 0x00da), (&[0xff20, 0x0027, 0x0059], 0x00dd),
    (&[0xff20, 0x0027, 0x005a], 0x0179), (&[0xff20, 0x0027, 0x0061], 0x00e1), (&[0xff20, 0x0027, 0x0063], 0x0107),
    (&[0xff20, 0x0027, 0x0065], 0x00e9), (&[0xff20, 0x0027, 0x0069], 0x00ed), (&[0xff20, 0x0027, 0x006c], 0x013a),
    (&[0xff20, 0x0027, 0x006e], 0x0144), (&[0xff20, 0x0027, 0x006f], 0x00f3), (&[0xff20, 0x0027, 0x0072], 0x0155),
    (&[0xff20, 0x0027, 0x0073], 0x015b), (&[0xff20, 0x0027, 0x0075], 0x00fa), (&[0xff20, 0x0027, 0x0079], 0x00fd),
    (&[0xff20, 0x0027, 0x007a], 0x017a), (&[0xff20, 0x002a, 0x0030], 0x00b0), (&[0xff20, 0x002a, 0x0041], 0x00c5),
    (&[0xff20, 0x002a, 0x0055], 0x016e), (&[0xff20, 0x002a, 0x0061], 0x00e5), (&[0xff20, 0x002a, 0x0075], 0x016f),
    (&[0xff20, 0x002b, 0x002d], 0x00b1), (&[0xff20, 0x002c, 0x0020], 0x00b8), (&[0xff20, 0x002c, 0x0022], 0x201e),
    (&[0xff20, 0x002c, 0x0027], 0x201a), (&[0xff20, 0x002c, 0x002c], 0x00b8), (&[0xff20, 0x002c, 0x002d], 0x00ac),
    (&[0xff20, 0x002c, 0x0041], 0x0104), (&[0xff20, 0x002c, 0x0043], 0x00c7), (&[0xff20, 0x002c, 0x0045], 0x0118),
    (&[0xff20, 0x002c, 0x0047], 0x0122), (&[0xff20, 0x002c, 0x0049], 0x012e), (&[0xff20, 0x002c, 0x004b], 0x0136),
    (&[0xff20, 0x002c, 0x004c], 0x013b), (&[0xff20, 0x002c, 0x004e], 0x0145), (&[0xff20, 0x002c, 0x0052], 0x0156),
    (&[0xff20, 0x002c, 0x0053], 0x015e), (&[0xff20, 0x002c, 0x0054], 0x0162), (&[0xff20, 0x002c, 0x0055], 0x0172),
    (&[0xff20, 0x002c, 0x0061], 0x0105), (&[0xff20, 0x002c, 0x0063], 0x00e7), (&[0xff20, 0x002c, 0x0065], 0x0119),
    (&[0xff20, 0x002c, 0x0067], 0x0123), (&[0xff20, 0x002c, 0x0069], 0x012f), (&[0xff20, 0x002c, 0x006b], 0x0137),
    (&[0xff20, 0x002c, 0x006c], 0x013c), (&[0xff20, 0x002c, 0x006e], 0x0146), (&[0xff20, 0x002c, 0x0072], 0x0157),
    (&[0xff20, 0x002c, 0x0073], 0x015f), (&[0xff20, 0x002c, 0x0074], 0x0163), (&[0xff20, 0x002c, 0x0075], 0x0173),
    (&[0xff20, 0x002d, 0x002b], 0x00b1), (&[0xff20, 0x002d, 0x002c], 0x00ac), (&[0xff20, 0x002d, 0x002d, 0x0020], 0x00ad),
    (&[0xff20, 0x002d, 0x002d, 0x002d], 0x2014), (&[0xff20, 0x002d, 0x002d, 0x002e], 0x2013), (&[0xff20, 0x002d, 0x003a], 0x00f7),
    (&[0xff20, 0x002d, 0x0041], 0x0100), (&[0xff20, 0x002d, 0x0044], 0x0110), (&[0xff20, 0x002d, 0x0045], 0x0112),
    (&[0xff20, 0x002d, 0x0049], 0x012a), (&[0xff20, 0x002d, 0x004c], 0x00a3), (&[0xff20, 0x002d, 0x004f], 0x014c),
    (&[0xff20, 0x002d, 0x0055], 0x016a), (&[0xff20, 0x002d, 0x0059], 0x00a5), (&[0xff20, 0x002d, 0x005e], 0x00af),
    (&[0xff20, 0x002d, 0x0061], 0x0101), (&[0xff20, 0x002d, 0x0064], 0x0111), (&[0xff20, 0x002d, 0x0065], 0x0113),
    (&[0xff20, 0x002d, 0x0069], 0x012b), (&[0xff20, 0x002d, 0x006c], 0x00a3), (&[0xff20, 0x002d, 0x006f], 0x014d),
    (&[0xff20, 0x002d, 0x0075], 0x016b), (&[0xff20, 0x002d, 0x0079], 0x00a5), (&[0xff20, 0x002e, 0x002d], 0x00b7),
    (&[0xff20, 0x002e, 0x002e], 0x2026), (&[0xff20, 0x002e, 0x003c], 0x2039), (&[0xff20, 0x002e, 0x003d], 0x2022),
    (&[0xff20, 0x002e, 0x003e], 0x203a), (&[0xff20, 0x002e, 0x0043], 0x010a), (&[0xff20, 0x002e, 0x0045], 0x0116),
    (&[0xff20, 0x002e, 0x0047], 0x0120), (&[0xff20, 0x002e, 0x0049], 0x0130), (&[0xff20, 0x002e, 0x005a], 0x017b),
    (&[0xff20, 0x002e, 0x005e], 0x00b7), (&[0xff20, 0x002e, 0x0063], 0x010b), (&[0xff20, 0x002e, 0x0065], 0x0117),
    (&[0xff20, 0x002e, 0x0067], 0x0121), (&[0xff20, 0x002e, 0x0069], 0x0131), (&[0xff20, 0x002e, 0x007a], 0x017c),
    (&[0xff20, 0x002f, 0x0043], 0x20a1), (&[0xff20, 0x002f, 0x0044], 0x0110), (&[0xff20, 0x002f, 0x0048], 0x0126),
    (&[0xff20, 0x002f, 0x004c], 0x0141), (&[0xff20, 0x002f, 0x004f], 0x00d8), (&[0xff20, 0x002f, 0x0054], 0x0166),
    (&[0xff20, 0x002f, 0x0063], 0x00a2), (&[0xff20, 0x002f, 0x0064], 0x0111), (&[0xff20, 0x002f, 0x0068], 0x0127),
    (&[0xff20, 0x002f, 0x006c], 0x0142), (&[0xff20, 0x002f, 0x006d], 0x20a5), (&[0xff20, 0x002f, 0x006f], 0x00f8),
    (&[0xff20, 0x002f, 0x0074], 0x0167), (&[0xff20, 0x002f, 0x0075], 0x00b5), (&[0xff20, 0x0030, 0x002a], 0x00b0),
    (&[0xff20, 0x0031, 0x0032], 0x00bd), (&[0xff20, 0x0031, 0x0033], 0x2153), (&[0xff20, 0x0031, 0x0034], 0x00bc),
    (&[0xff20, 0x0031, 0x0035], 0x2155), (&[0xff20, 0x0031, 0x0036], 0x2159), (&[0xff20, 0x0031, 0x0037], 0x2150),
    (&[0xff20, 0x0031, 0x0038], 0x215b), (&[0xff20, 0x0031, 0x0039], 0x2151), (&[0xff20, 0x0031, 0x005e], 0x00b9),
    (&[0xff20, 0x0032, 0x0033], 0x2154), (&[0xff20, 0x0032, 0x0035], 0x2156), (&[0xff20, 0x0032, 0x005e], 0x00b2),
    (&[0xff20, 0x0033, 0x0034], 0x00be), (&[0xff20, 0x0033, 0x0035], 0x2157), (&[0xff20, 0x0033, 0x0038], 0x215c),
    (&[0xff20, 0x0033, 0x005e], 0x00b3), (&[0xff20, 0x0034, 0x0035], 0x2158), (&[0xff20, 0x0035, 0x0036], 0x215a),
    (&[0xff20, 0x0035, 0x0038], 0x215d), (&[0xff20, 0x0037, 0x0038], 0x215e), (&[0xff20, 0x003a, 0x002d], 0x00f7),
    (&[0xff20, 0x003b, 0x0041], 0x0104), (&[0xff20, 0x003b, 0x0045], 0x0118), (&[0xff20, 0x003b, 0x0049], 0x012e),
    (&[0xff20, 0x003b, 0x0055], 0x0172), (&[0xff20, 0x003b, 0x0061], 0x0105), (&[0xff20, 0x003b, 0x0065], 0x0119),
    (&[0xff20, 0x003b, 0x0069], 0x012f), (&[0xff20, 0x003b, 0x0075], 0x0173), (&[0xff20, 0x003c, 0x0022], 0x201c),
    (&[0xff20, 0x003c, 0x0027], 0x2018), (&[0xff20, 0x003c, 0x003c], 0x00ab), (&[0xff20, 0x003c, 0x0043], 0x010c),
    (&[0xff20, 0x003c, 0x0044], 0x010e), (&[0xff20, 0x003c, 0x0045], 0x011a), (&[0xff20, 0x003c, 0x004c], 0x013d),
    (&[0xff20, 0x003c, 0x004e], 0x0147), (&[0xff20, 0x003c, 0x0052], 0x0158), (&[0xff20, 0x003c, 0x0053], 0x0160),
    (&[0xff20, 0x003c, 0x0054], 0x0164), (&[0xff20, 0x003c, 0x005a], 0x017d), (&[0xff20, 0x003c, 0x0063], 0x010d),
    (&[0xff20, 0x003c, 0x0064], 0x010f), (&[0xff20, 0x003c, 0x0065], 0x011b), (&[0xff20, 0x003c, 0x006c], 0x013e),
    (&[0xff20, 0x003c, 0x006e], 0x0148), (&[0xff20, 0x003c, 0x0072], 0x0159), (&[0xff20, 0x003c, 0x0073], 0x0161),
    (&[0xff20, 0x003c, 0x0074], 0x0165), (&[0xff20, 0x003c, 0x007a], 0x017e), (&[0xff20, 0x003d, 0x0043], 0x20ac),
    (&[0xff20, 0x003d, 0x0045], 0x20ac), (&[0xff20, 0x003d, 0x004c], 0x20a4), (&[0xff20, 0x003d, 0x004e], 0x20a6),
    (&[0xff20, 0x003d, 0x004f], 0x0150), (&[0xff20, 0x003d, 0x0050], 0x20bd), (&[0xff20, 0x003d, 0x0052], 0x20b9),
    (&[0xff20, 0x003d, 0x0055], 0x0170), (&[0xff20, 0x003d, 0x0057], 0x20a9), (&[0xff20, 0x003d, 0x0059], 0x00a5),
    (&[0xff20, 0x003d, 0x0063], 0x20ac), (&[0xff20, 0x003d, 0x0064], 0x20ab), (&[0xff20, 0x003d, 0x0065], 0x20ac),
    (&[0xff20, 0x003d, 0x006f], 0x0151), (&[0xff20, 0x003d, 0x0070], 0x20bd), (&[0xff20, 0x003d, 0x0072], 0x20b9),
    (&[0xff20, 0x003d, 0x0075], 0x0171), (&[0xff20, 0x003d, 0x0079], 0x00a5), (&[0xff20, 0x003e, 0x0022], 0x201d),
    (&[0xff20, 0x003e, 0x0027], 0x2019), (&[0xff20, 0x003e, 0x003e], 0x00bb), (&[0xff20, 0x003e, 0x0041], 0x00c2),
    (&[0xff20, 0x003e, 0x0045], 0x00ca), (&[0xff20, 0x003e, 0x0049], 0x00ce), (&[0xff20, 0x003e, 0x004f], 0x00d4),
    (&[0xff20, 0x003e, 0x0055], 0x00db), (&[0xff20, 0x003e, 0x0061], 0x00e2), (&[0xff20, 0x003e, 0x0065], 0x00ea),
    (&[0xff20, 0x003e, 0x0069], 0x00ee), (&[0xff20, 0x003e, 0x006f], 0x00f4), (&[0xff20, 0x003e, 0x0075], 0x00fb),
    (&[0xff20, 0x003f, 0x003f], 0x00bf), (&[0xff20, 0x0041, 0x0022], 0x00c4), (&[0xff20, 0x0041, 0x0027], 0x00c1),
    (&[0xff20, 0x0041, 0x0028], 0x0102), (&[0xff20, 0x0041, 0x002a], 0x00c5), (&[0xff20, 0x0041, 0x002c], 0x0104),
    (&[0xff20, 0x0041, 0x002d], 0x0100), (&[0xff20, 0x0041, 0x003b], 0x0104), (&[0xff20, 0x0041, 0x003e], 0x00c2),
    (&[0xff20, 0x0041, 0x0041], 0x00c5), (&[0xff20, 0x0041, 0x0045], 0x00c6), (&[0xff20, 0x0041, 0x005e], 0x00c2),
    (&[0xff20, 0x0041, 0x005f], 0x0100), (&[0xff20, 0x0041, 0x0060], 0x00c0), (&[0xff20, 0x0041, 0x007e], 0x00c3),
    (&[0xff20, 0x0043, 0x0027], 0x0106), (&[0xff20, 0x0043, 0x002c], 0x00c7), (&[0xff20, 0x0043, 0x002e], 0x010a),
    (&[0xff20, 0x0043, 0x002f], 0x20a1), (&[0xff20, 0x0043, 0x003c], 0x010c), (&[0xff20, 0x0043, 0x003d], 0x20ac),
    (&[0xff20, 0x0043, 0x0045], 0x20a0), (&[0xff20, 0x0043, 0x004f], 0x00a9), (&[0xff20, 0x0043, 0x006f], 0x00a9),
    (&[0xff20, 0x0043, 0x0072], 0x20a2), (&[0xff20, 0x0043, 0x007c], 0x00a2), (&[0xff20, 0x0044, 0x002d], 0x0110),
    (&[0xff20, 0x0044, 0x003c], 0x010e), (&[0xff20, 0x0044, 0x0048], 0x00d0), (&[0xff20, 0x0045, 0x0022], 0x00cb),
    (&[0xff20, 0x0045, 0x0027], 0x00c9), (&[0xff20, 0x0045, 0x002c], 0x0118), (&[0xff20, 0x0045, 0x002d], 0x0112),
    (&[0xff20, 0x0045, 0x002e], 0x0116), (&[0xff20, 0x0045, 0x003b], 0x0118), (&[0xff20, 0x0045, 0x003c], 0x011a),
    (&[0xff20, 0x0045, 0x003d], 0x20ac), (&[0xff20, 0x0045, 0x003e], 0x00ca), (&[0xff20, 0x0045, 0x005e], 0x00ca),
    (&[0xff20, 0x0045, 0x005f], 0x0112), (&[0xff20, 0x0045, 0x0060], 0x00c8), (&[0xff20, 0x0046, 0x0072], 0x20a3),
    (&[0xff20, 0x0047, 0x0028], 0x011e), (&[0xff20, 0x0047, 0x002c], 0x0122), (&[0xff20, 0x0047, 0x002e], 0x0120),
    (&[0xff20, 0x0047, 0x0055], 0x011e), (&[0xff20, 0x0049, 0x0022], 0x00cf), (&[0xff20, 0x0049, 0x0027], 0x00cd),
    (&[0xff20, 0x0049, 0x002c], 0x012e), (&[0xff20, 0x0049, 0x002d], 0x012a), (&[0xff20, 0x0049, 0x002e], 0x0130),
    (&[0xff20, 0x0049, 0x003b], 0x012e), (&[0xff20, 0x0049, 0x003e], 0x00ce), (&[0xff20, 0x0049, 0x004a], 0x0132),
    (&[0xff20, 0x0049, 0x005e], 0x00ce), (&[0xff20, 0x0049, 0x005f], 0x012a), (&[0xff20, 0x0049, 0x0060], 0x00cc),
    (&[0xff20, 0x0049, 0x006a], 0x0132), (&[0xff20, 0x0049, 0x007e], 0x0128), (&[0xff20, 0x004b, 0x002c], 0x0136),
    (&[0xff20, 0x004c, 0x0027], 0x0139), (&[0xff20, 0x004c, 0x002c], 0x013b), (&[0xff20, 0x004c, 0x002d], 0x00a3),
    (&[0xff20, 0x004c, 0x002f], 0x0141), (&[0xff20, 0x004c, 0x003c], 0x013d), (&[0xff20, 0x004c, 0x003d], 0x20a4),
    (&[0xff20, 0x004e, 0x0027], 0x0143), (&[0xff20, 0x004e, 0x002c], 0x0145), (&[0xff20, 0x004e, 0x003c], 0x0147),
    (&[0xff20, 0x004e, 0x003d], 0x20a6), (&[0xff20, 0x004e, 0x0047], 0x014a), (&[0xff20, 0x004e, 0x007e], 0x00d1),
    (&[0xff20, 0x004f, 0x0022], 0x00d6), (&[0xff20, 0x004f, 0x0027], 0x00d3), (&[0xff20, 0x004f, 0x002d], 0x014c),
    (&[0xff20, 0x004f, 0x002f], 0x00d8), (&[0xff20, 0x004f, 0x003e], 0x00d4), (&[0xff20, 0x004f, 0x0043], 0x00a9),
    (&[0xff20, 0x004f, 0x0045], 0x0152), (&[0xff20, 0x004f, 0x0052], 0x00ae), (&[0xff20, 0x004f, 0x0053], 0x00a7),
    (&[0xff20, 0x004f, 0x0058], 0x00a4), (&[0xff20, 0x004f, 0x005e], 0x00d4), (&[0xff20, 0x004f, 0x005f], 0x014c),
    (&[0xff20, 0x004f, 0x0060], 0x00d2), (&[0xff20, 0x004f, 0x0063], 0x00a9), (&[0xff20, 0x004f, 0x0072], 0x00ae),
    (&[0xff20, 0x004f, 0x0078], 0x00a4), (&[0xff20, 0x004f, 0x007e], 0x00d5), (&[0xff20, 0x0050, 0x0021], 0x00b6),
    (&[0xff20, 0x0050, 0x003d], 0x20bd), (&[0xff20, 0x0050, 0x0050], 0x00b6), (&[0xff20, 0x0050, 0x0074], 0x20a7),
    (&[0xff20, 0x0052, 0x0027], 0x0154), (&[0xff20, 0x0052, 0x002c], 0x0156), (&[0xff20, 0x0052, 0x003c], 0x0158),
    (&[0xff20, 0x0052, 0x003d], 0x20b9), (&[0xff20, 0x0052, 0x004f], 0x00ae), (&[0xff20, 0x0052, 0x006f], 0x00ae),
    (&[0xff20, 0x0052, 0x0073], 0x20a8), (&[0xff20, 0x0053, 0x0021], 0x00a7), (&[0xff20, 0x0053, 0x0027], 0x015a),
    (&[0xff20, 0x0053, 0x002c], 0x015e), (&[0xff20, 0x0053, 0x003c], 0x0160), (&[0xff20, 0x0053, 0x004f], 0x00a7),
    (&[0xff20, 0x0054, 0x002c], 0x0162), (&[0xff20, 0x0054, 0x002d], 0x0166), (&[0xff20, 0x0054, 0x002f], 0x0166),
    (&[0xff20, 0x0054, 0x003c], 0x0164), (&[0xff20, 0x0054, 0x0048], 0x00de), (&[0xff20, 0x0054, 0x004d], 0x2122),
    (&[0xff20, 0x0055, 0x0022], 0x00dc), (&[0xff20, 0x0055, 0x0027], 0x00da), (&[0xff20, 0x0055, 0x002a], 0x016e),
    (&[0xff20, 0x0055, 0x002c], 0x0172), (&[0xff20, 0x0055, 0x002d], 0x016a), (&[0xff20, 0x0055, 0x003b], 0x0172),
    (&[0xff20, 0x0055, 0x003e], 0x00db), (&[0xff20, 0x0055, 0x0041], 0x0102), (&[0xff20, 0x0055, 0x0045], 0x0114),
    (&[0xff20, 0x0055, 0x0047], 0x011e), (&[0xff20, 0x0055, 0x0049], 0x012c), (&[0xff20, 0x0055, 0x004f], 0x014e),
    (&[0xff20, 0x0055, 0x0055], 0x016c), (&[0xff20, 0x0055, 0x005e], 0x00db), (&[0xff20, 0x0055, 0x005f], 0x016a),
    (&[0xff20, 0x0055, 0x0060], 0x00d9), (&[0xff20, 0x0055, 0x0061], 0x0103), (&[0xff20, 0x0055, 0x0065], 0x0115),
    (&[0xff20, 0x0055, 0x0067], 0x011f), (&[0xff20, 0x0055, 0x0069], 0x012d), (&[0xff20, 0x0055, 0x006f], 0x014f),
    (&[0xff20, 0x0055, 0x0075], 0x016d), (&[0xff20, 0x0055, 0x007e], 0x0168), (&[0xff20, 0x0057, 0x003d], 0x20a9),
    (&[0xff20, 0x0057, 0x005e], 0x0174), (&[0xff20, 0x0058, 0x004f], 0x00a4), (&[0xff20, 0x0058, 0x006f], 0x00a4),
    (&[0xff20, 0x0059, 0x0022], 0x0178), (&[0xff20, 0x0059, 0x0027], 0x00dd), (&[0xff20, 0x0059, 0x002d], 0x00a5),
    (&[0xff20, 0x0059, 0x003d], 0x00a5), (&[0xff20, 0x0059, 0x005e], 0x0176), (&[0xff20, 0x005a, 0x0027], 0x0179),
    (&[0xff20, 0x005a, 0x002e], 0x017b), (&[0xff20, 0x005a, 0x003c], 0x017d), (&[0xff20, 0x005e, 0x0028], 0x207d),
    (&[0xff20, 0x005e, 0x0029], 0x207e), (&[0xff20, 0x005e, 0x002b], 0x207a), (&[0xff20, 0x005e, 0x002d], 0x207b),
    (&[0xff20, 0x005e, 0x002e], 0x00b7), (&[0xff20, 0x005e, 0x0030], 0x2070), (&[0xff20, 0x005e, 0x0031], 0x00b9),
    (&[0xff20, 0x005e, 0x0032], 0x00b2), (&[0xff20, 0x005e, 0x0033], 0x00b3), (&[0xff20, 0x005e, 0x0034], 0x2074),
    (&[0xff20, 0x005e, 0x0035], 0x2075), (&[0xff20, 0x005e, 0x0036], 0x2076), (&[0xff20, 0x005e, 0x0037], 0x2077),
    (&[0xff20, 0x005e, 0x0038], 0x2078), (&[0xff20, 0x005e, 0x0039], 0x2079), (&[0xff20, 0x005e, 0x003d], 0x207c),
    (&[0xff20, 0x005e, 0x0041], 0x00c2), (&[0xff20, 0x005e, 0x0043], 0x0108), (&[0xff20, 0x005e, 0x0045], 0x00ca),
    (&[0xff20, 0x005e, 0x0047], 0x011c), (&[0xff20, 0x005e, 0x0048], 0x0124), (&[0xff20, 0x005e, 0x0049], 0x00ce),
    (&[0xff20, 0x005e, 0x004a], 0x0134), (&[0xff20, 0x005e, 0x004f], 0x00d4), (&[0xff20, 0x005e, 0x0053], 0x015c),
    (&[0xff20, 0x005e, 0x0055], 0x00db), (&[0xff20, 0x005e, 0x0057], 0x0174), (&[0xff20, 0x005e, 0x0059], 0x0176),
    (&[0xff20, 0x005e, 0x0061], 0x00e2), (&[0xff20, 0x005e, 0x0063], 0x0109), (&[0xff20, 0x005e, 0x0065], 0x00ea),
    (&[0xff20, 0x005e, 0x0067], 0x011d), (&[0xff20, 0x005e, 0x0068], 0x0125), (&[0xff20, 0x005e, 0x0069], 0x00ee),
    (&[0xff20, 0x005e, 0x006a], 0x0135), (&[0xff20, 0x005e, 0x006f], 0x00f4), (&[0xff20, 0x005e, 0x0073], 0x015d),
    (&[0xff20, 0x005e, 0x0075], 0x00fb), (&[0xff20, 0x005e, 0x0077], 0x0175), (&[0xff20, 0x005e, 0x0079], 0x0177),
    (&[0xff20, 0x005f, 0x0020], 0x00af), (&[0xff20, 0x005f, 0x0028], 0x208d), (&[0xff20, 0x005f, 0x0029], 0x208e),
    (&[0xff20, 0x005f, 0x002b], 0x208a), (&[0xff20, 0x005f, 0x002d], 0x208b), (&[0xff20, 0x005f, 0x0030], 0x2080),
    (&[0xff20, 0x005f, 0x0031], 0x2081), (&[0xff20, 0x005f, 0x0032], 0x2082), (&[0xff20, 0x005f, 0x0033], 0x2083),
    (&[0xff20, 0x005f, 0x0034], 0x2084), (&[0xff20, 0x005f, 0x0035], 0x2085), (&[0xff20, 0x005f, 0x0036], 0x2086),
    (&[0xff20, 0x005f, 0x0037], 0x2087), (&[0xff20, 0x005f, 0x0038], 0x2088), (&[0xff20, 0x005f, 0x0039], 0x2089),
    (&[0xff20, 0x005f, 0x003d], 0x208c), (&[0xff20, 0x005f, 0x0041], 0x0100), (&[0xff20, 0x005f, 0x0045], 0x0112),
    (&[0xff20, 0x005f, 0x0049], 0x012a), (&[0xff20, 0x005f, 0x004f], 0x014c), (&[0xff20, 0x005f, 0x0055], 0x016a),
    (&[0xff20, 0x005f, 0x005e], 0x00af), (&[0xff20, 0x005f, 0x005f], 0x00af), (&[0xff20, 0x005f, 0x0061], 0x0101),
    (&[0xff20, 0x005f, 0x0065], 0x0113), (&[0xff20, 0x005f, 0x0069], 0x012b), (&[0xff20, 0x005f, 0x006f], 0x014d),
    (&[0xff20, 0x005f, 0x0075], 0x016b), (&[0xff20, 0x0060, 0x0041], 0x00c0), (&[0xff20, 0x0060, 0x0045], 0x00c8),
    (&[0xff20, 0x0060, 0x0049], 0x00cc), (&[0xff20, 0x0060, 0x004f], 0x00d2), (&[0xff20, 0x0060, 0x0055], 0x00d9),
    (&[0xff20, 0x0060, 0x0061], 0x00e0), (&[0xff20, 0x0060, 0x0065], 0x00e8), (&[0xff20, 0x0060, 0x0069], 0x00ec),
    (&[0xff20, 0x0060, 0x006f], 0x00f2), (&[0xff20, 0x0060, 0x0075], 0x00f9), (&[0xff20, 0x0061, 0x0022], 0x00e4),
    (&[0xff20, 0x0061, 0x0027], 0x00e1), (&[0xff20, 0x0061, 0x0028], 0x0103), (&[0xff20, 0x0061, 0x002a], 0x00e5),
    (&[0xff20, 0x0061, 0x002c], 0x0105), (&[0xff20, 0x0061, 0x002d], 0x0101), (&[0xff20, 0x0061, 0x003b], 0x0105),
    (&[0xff20, 0x0061, 0x003e], 0x00e2), (&[0xff20, 0x0061, 0x005e], 0x00e2), (&[0xff20, 0x0061, 0x005f], 0x0101),
    (&[0xff20, 0x0061, 0x0060], 0x00e0), (&[0xff20, 0x0061, 0x0061], 0x00e5), (&[0xff20, 0x0061, 0x0065], 0x00e6),
    (&[0xff20, 0x0061, 0x007e], 0x00e3), (&[0xff20, 0x0062, 0x0041], 0x0102), (&[0xff20, 0x0062, 0x0045], 0x0114),
    (&[0xff20, 0x0062, 0x0047], 0x011e), (&[0xff20, 0x0062, 0x0049], 0x012c), (&[0xff20, 0x0062, 0x004f], 0x014e),
    (&[0xff20, 0x0062, 0x0055], 0x016c), (&[0xff20, 0x0062, 0x0061], 0x0103), (&[0xff20, 0x0062, 0x0065], 0x0115),
    (&[0xff20, 0x0062, 0x0067], 0x011f), (&[0xff20, 0x0062, 0x0069], 0x012d), (&[0xff20, 0x0062, 0x006f], 0x014f),
    (&[0xff20, 0x0062, 0x0075], 0x016d), (&[0xff20, 0x0063, 0x0027], 0x0107), (&[0xff20, 0x0063, 0x002c], 0x00e7),
    (&[0xff20, 0x0063, 0x002e], 0x010b), (&[0xff20, 0x0063, 0x002f], 0x00a2), (&[0xff20, 0x0063, 0x003c], 0x010d),
    (&[0xff20, 0x0063, 0x003d], 0x20ac), (&[0xff20, 0x0063, 0x0043], 0x010c), (&[0xff20, 0x0063, 0x0044], 0x010e),
    (&[0xff20, 0x0063, 0x0045], 0x011a), (&[0xff20, 0x0063, 0x004c], 0x013d), (&[0xff20, 0x0063, 0x004e], 0x0147),
    (&[0xff20, 0x0063, 0x0052], 0x0158), (&[0xff20, 0x0063, 0x0053], 0x0160), (&[0xff20, 0x0063, 0x0054], 0x0164),
    (&[0xff20, 0x0063, 0x005a], 0x017d), (&[0xff20, 0x0063, 0x0063], 0x010d), (&[0xff20, 0x0063, 0x0064], 0x010f),
    (&[0xff20, 0x0063, 0x0065], 0x011b), (&[0xff20, 0x0063, 0x006c], 0x013e), (&[0xff20, 0x0063, 0x006e], 0x0148),
    (&[0xff20, 0x0063, 0x0072], 0x0159), (&[0xff20, 0x0063, 0x0073], 0x0161), (&[0xff20, 0x0063, 0x0074], 0x0165),
    (&[0xff20, 0x0063, 0x007a], 0x017e), (&[0xff20, 0x0063, 0x007c], 0x00a2), (&[0xff20, 0x0064, 0x002d], 0x0111),
    (&[0xff20, 0x0064, 0x003c], 0x010f), (&[0xff20, 0x0064, 0x003d], 0x20ab), (&[0xff20, 0x0064, 0x0068], 0x00f0),
    (&[0xff20, 0x0065, 0x0022], 0x00eb), (&[0xff20, 0x0065, 0x0027], 0x00e9), (&[0xff20, 0x0065, 0x002c], 0x0119),
    (&[0xff20, 0x0065, 0x002d], 0x0113), (&[0xff20, 0x0065, 0x002e], 0x0117), (&[0xff20, 0x0065, 0x003b], 0x0119),
    (&[0xff20, 0x0065, 0x003c], 0x011b), (&[0xff20, 0x0065, 0x003d], 0x20ac), (&[0xff20, 0x0065, 0x003e], 0x00ea),
    (&[0xff20, 0x0065, 0x005e], 0x00ea), (&[0xff20, 0x0065, 0x005f], 0x0113), (&[0xff20, 0x0065, 0x0060], 0x00e8),
    (&[0xff20, 0x0066, 0x0053], 0x017f), (&[0xff20, 0x0066, 0x0073], 0x017f), (&[0xff20, 0x0067, 0x0028], 0x011f),
    (&[0xff20, 0x0067, 0x002c], 0x0123), (&[0xff20, 0x0067, 0x002e], 0x0121), (&[0xff20, 0x0067, 0x0055], 0x011f),
    (&[0xff20, 0x0069, 0x0022], 0x00ef), (&[0xff20, 0x0069, 0x0027], 0x00ed), (&[0xff20, 0x0069, 0x002c], 0x012f),
    (&[0xff20, 0x0069, 0x002d], 0x012b), (&[0xff20, 0x0069, 0x002e], 0x0131), (&[0xff20, 0x0069, 0x003b], 0x012f),
    (&[0xff20, 0x0069, 0x003e], 0x00ee), (&[0xff20, 0x0069, 0x005e], 0x00ee), (&[0xff20, 0x0069, 0x005f], 0x012b),
    (&[0xff20, 0x0069, 0x0060], 0x00ec), (&[0xff20, 0x0069, 0x006a], 0x0133), (&[0xff20, 0x0069, 0x007e], 0x0129),
    (&[0xff20, 0x006b, 0x002c], 0x0137), (&[0xff20, 0x006b, 0x006b], 0x0138), (&[0xff20, 0x006c, 0x0027], 0x013a),
    (&[0xff20, 0x006c, 0x002c], 0x013c), (&[0xff20, 0x006c, 0x002d], 0x00a3), (&[0xff20, 0x006c, 0x002f], 0x0142),
    (&[0xff20, 0x006c, 0x003c], 0x013e), (&[0xff20, 0x006d, 0x002f], 0x20a5), (&[0xff20, 0x006d, 0x0075], 0x00b5),
    (&[0xff20, 0x006e, 0x0027], 0x0144), (&[0xff20, 0x006e, 0x002c], 0x0146), (&[0xff20, 0x006e, 0x003c], 0x0148),
    (&[0xff20, 0x006e, 0x0067], 0x014b), (&[0xff20, 0x006e, 0x007e], 0x00f1), (&[0xff20, 0x006f, 0x0022], 0x00f6),
    (&[0xff20, 0x006f, 0x0027], 0x00f3), (&[0xff20, 0x006f, 0x002d], 0x014d), (&[0xff20, 0x006f, 0x002f], 0x00f8),
    (&[0xff20, 0x006f, 0x003e], 0x00f4), (&[0xff20, 0x006f, 0x0041], 0x00c5), (&[0xff20, 0x006f, 0x0043], 0x00a9),
    (&[0xff20, 0x006f, 0x0052], 0x00ae), (&[0xff20, 0x006f, 0x0055], 0x016e), (&[0xff20, 0x006f, 0x0058], 0x00a4),
    (&[0xff20, 0x006f, 0x005e], 0x00f4), (&[0xff20, 0x006f, 0x005f], 0x014d), (&[0xff20, 0x006f, 0x0060], 0x00f2),
    (&[0xff20, 0x006f, 0x0061], 0x00e5), (&[0xff20, 0x006f, 0x0063], 0x00a9), (&[0xff20, 0x006f, 0x0065], 0x0153),
    (&[0xff20, 0x006f, 0x006f], 0x00b0), (&[0xff20, 0x006f, 0x0072], 0x00ae), (&[0xff20, 0x006f, 0x0073], 0x00a7),
    (&[0xff20, 0x006f, 0x0075], 0x016f), (&[0xff20, 0x006f, 0x0078], 0x00a4), (&[0xff20, 0x006f, 0x007e], 0x00f5),
    (&[0xff20, 0x0070, 0x0021], 0x00b6), (&[0xff20, 0x0070, 0x003d], 0x20bd), (&[0xff20, 0x0072, 0x0027], 0x0155),
    (&[0xff20, 0x0072, 0x002c], 0x0157), (&[0xff20, 0x0072, 0x003c], 0x0159), (&[0xff20, 0x0072, 0x003d], 0x20b9),
    (&[0xff20, 0x0073, 0x0021], 0x00a7), (&[0xff20, 0x0073, 0x0027], 0x015b), (&[0xff20, 0x0073, 0x002c], 0x015f),
    (&[0xff20, 0x0073, 0x003c], 0x0161), (&[0xff20, 0x0073, 0x006f], 0x00a7), (&[0xff20, 0x0073, 0x0073], 0x00df),
    (&[0xff20, 0x0074, 0x002c], 0x0163), (&[0xff20, 0x0074, 0x002d], 0x0167), (&[0xff20, 0x0074, 0x002f], 0x0167),
    (&[0xff20, 0x0074, 0x003c], 0x0165), (&[0xff20, 0x0074, 0x0068], 0x00fe), (&[0xff20, 0x0074, 0x006d], 0x2122),
    (&[0xff20, 0x0075, 0x0022], 0x00fc), (&[0xff20, 0x0075, 0x0027], 0x00fa), (&[0xff20, 0x0075, 0x002a], 0x016f),
    (&[0xff20, 0x0075, 0x002c], 0x0173), (&[0xff20, 0x0075, 0x002d], 0x016b), (&[0xff20, 0x0075, 0x002f], 0x00b5),
    (&[0xff20, 0x0075, 0x003b], 0x0173), (&[0xff20, 0x0075, 0x003e], 0x00fb), (&[0xff20, 0x0075, 0x0041], 0x0102),
    (&[0xff20, 0x0075, 0x0045], 0x0114), (&[0xff20, 0x0075, 0x0047], 0x011e), (&[0xff20, 0x0075, 0x0049], 0x012c),
    (&[0xff20, 0x0075, 0x004f], 0x014e), (&[0xff20, 0x0075, 0x0055], 0x016c), (&[0xff20, 0x0075, 0x005e], 0x00fb),
    (&[0xff20, 0x0075, 0x005f], 0x016b), (&[0xff20, 0x0075, 0x0060], 0x00f9), (&[0xff20, 0x0075, 0x0061], 0x0103),
    (&[0xff20, 0x0075, 0x0065], 0x0115), (&[0xff20, 0x0075, 0x0067], 0x011f), (&[0xff20, 0x0075, 0x0069], 0x012d),
    (&[0xff20, 0x0075, 0x006f], 0x014f), (&[0xff20, 0x0075, 0x0075], 0x016d), (&[0xff20, 0x0075, 0x007e], 0x0169),
    (&[0xff20, 0x0076, 0x0043], 0x010c), (&[0xff20, 0x0076, 0x0044], 0x010e), (&[0xff20, 0x0076, 0x0045], 0x011a),
    (&[0xff20, 0x0076, 0x004e], 0x0147), (&[0xff20, 0x0076, 0x0052], 0x0158), (&[0xff20, 0x0076, 0x0053], 0x0160),
    (&[0xff20, 0x0076, 0x0054], 0x0164), (&[0xff20, 0x0076, 0x005a], 0x017d), (&[0xff20, 0x0076, 0x0063], 0x010d),
    (&[0xff20, 0x0076, 0x0064], 0x010f), (&[0xff20, 0x0076, 0x0065], 0x011b), (&[0xff20, 0x0076, 0x006e], 0x0148),
    (&[0xff20, 0x0076, 0x0072], 0x0159), (&[0xff20, 0x0076, 0x0073], 0x0161), (&[0xff20, 0x0076, 0x0074], 0x0165),
    (&[0xff20, 0x0076, 0x007a], 0x017e), (&[0xff20, 0x0077, 0x005e], 0x0175), (&[0xff20, 0x0078, 0x004f], 0x00a4),
    (&[0xff20, 0x0078, 0x006f], 0x00a4), (&[0xff20, 0x0078, 0x0078], 0x00d7), (&[0xff20, 0x0079, 0x0022], 0x00ff),
    (&[0xff20, 0x0079, 0x0027], 0x00fd), (&[0xff20, 0x0079, 0x002d], 0x00a5), (&[0xff20, 0x0079, 0x003d], 0x00a5),
    (&[0xff20, 0x0079, 0x005e], 0x0177), (&[0xff20, 0x007a, 0x0027], 0x017a), (&[0xff20, 0x007a, 0x002e], 0x017c),
    (&[0xff20, 0x007a, 0x003c], 0x017e), (&[0xff20, 0x007c, 0x0043], 0x00a2), (&[0xff20, 0x007c, 0x0063], 0x00a2),
    (&[0xff20, 0x007e, 0x0041], 0x00c3), (&[0xff20, 0x007e, 0x0049], 0x0128), (&[0xff20, 0x007e, 0x004e], 0x00d1),
    (&[0xff20, 0x007e, 0x004f], 0x00d5), (&[0xff20, 0x007e, 0x0055], 0x0168), (&[0xff20, 0x007e, 0x0061], 0x00e3),
    (&[0xff20, 0x007e, 0x0069], 0x0129), (&[0xff20, 0x007e, 0x006e], 0x00f1), (&[0xff20, 0x007e, 0x006f], 0x00f5),
    (&[0xff20, 0x007e, 0x0075], 0x0169),
];
