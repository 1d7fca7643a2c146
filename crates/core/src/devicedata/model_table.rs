//! Hardware identifier to marketing name table
//!
//! Lookups are exact. Identifiers missing from the table are reported by the
//! collector as-is, so newer hardware still produces a usable value.

/// `(hardware identifier, human-readable name)` pairs.
pub static HARDWARE_MODELS: &[(&str, &str)] = &[
    // iPhone
    ("iPhone1,1", "iPhone"),
    ("iPhone1,2", "iPhone 3G"),
    ("iPhone2,1", "iPhone 3GS"),
    ("iPhone3,1", "iPhone 4 (GSM)"),
    ("iPhone3,2", "iPhone 4 (GSM Rev A)"),
    ("iPhone3,3", "iPhone 4 (CDMA)"),
    ("iPhone4,1", "iPhone 4S"),
    ("iPhone5,1", "iPhone 5 (model A1428, AT&T/Canada)"),
    ("iPhone5,2", "iPhone 5 (model A1429, everything else)"),
    ("iPhone5,3", "iPhone 5c (model A1456, A1532 | GSM)"),
    ("iPhone5,4", "iPhone 5c (model A1507, A1516, A1526 (China), A1529 | Global)"),
    ("iPhone6,1", "iPhone 5s (model A1433, A1533 | GSM)"),
    ("iPhone6,2", "iPhone 5s (model A1457, A1518, A1528 (China), A1530 | Global)"),
    ("iPhone7,1", "iPhone 6 Plus"),
    ("iPhone7,2", "iPhone 6"),
    ("iPhone8,1", "iPhone 6S"),
    ("iPhone8,2", "iPhone 6S Plus"),
    ("iPhone8,4", "iPhone SE"),
    ("iPhone9,1", "iPhone 7 (CDMA)"),
    ("iPhone9,2", "iPhone 7 Plus (CDMA)"),
    ("iPhone9,3", "iPhone 7 (GSM)"),
    ("iPhone9,4", "iPhone 7 Plus (GSM)"),
    ("iPhone10,1", "iPhone 8 (CDMA)"),
    ("iPhone10,2", "iPhone 8 Plus (CDMA)"),
    ("iPhone10,3", "iPhone X (CDMA)"),
    ("iPhone10,4", "iPhone 8 (GSM)"),
    ("iPhone10,5", "iPhone 8 Plus (GSM)"),
    ("iPhone10,6", "iPhone X (GSM)"),
    // iPod touch
    ("iPod1,1", "iPod Touch 1st Generation"),
    ("iPod2,1", "iPod Touch 2nd Generation"),
    ("iPod3,1", "iPod Touch 3rd Generation"),
    ("iPod4,1", "iPod Touch 4th Generation"),
    ("iPod5,1", "iPod Touch 5th Generation"),
    ("iPod7,1", "iPod Touch 6th Generation"),
    // iPad
    ("iPad1,1", "iPad"),
    ("iPad2,1", "iPad 2 (WiFi)"),
    ("iPad2,2", "iPad 2 (GSM)"),
    ("iPad2,3", "iPad 2 (CDMA)"),
    ("iPad2,4", "iPad 2 (WiFi Rev A)"),
    ("iPad3,1", "iPad 3rd Generation (WiFi)"),
    ("iPad3,2", "iPad 3rd Generation (GSM+CDMA)"),
    ("iPad3,3", "iPad 3rd Generation (GSM)"),
    ("iPad3,4", "iPad 4th Generation (WiFi)"),
    ("iPad3,5", "iPad 4th Generation (GSM)"),
    ("iPad3,6", "iPad 4th Generation (GSM+CDMA)"),
    ("iPad4,1", "iPad Air (WiFi)"),
    ("iPad4,2", "iPad Air (Cellular)"),
    ("iPad4,3", "iPad Air (China)"),
    ("iPad5,3", "iPad Air 2 (WiFi)"),
    ("iPad5,4", "iPad Air 2 (Cellular)"),
    ("iPad6,3", "iPad Pro 9.7-inch (WiFi)"),
    ("iPad6,4", "iPad Pro 9.7-inch (Cellular)"),
    ("iPad6,7", "iPad Pro 12.9-inch (WiFi)"),
    ("iPad6,8", "iPad Pro 12.9-inch (Cellular)"),
    ("iPad6,11", "iPad 5th Generation (WiFi)"),
    ("iPad6,12", "iPad 5th Generation (Cellular)"),
    ("iPad7,1", "iPad Pro 12.9-inch 2nd Generation (WiFi)"),
    ("iPad7,2", "iPad Pro 12.9-inch 2nd Generation (Cellular)"),
    ("iPad7,3", "iPad Pro 10.5-inch (WiFi)"),
    ("iPad7,4", "iPad Pro 10.5-inch (Cellular)"),
    // iPad mini
    ("iPad2,5", "iPad mini (WiFi)"),
    ("iPad2,6", "iPad mini (GSM)"),
    ("iPad2,7", "iPad mini (GSM+CDMA)"),
    ("iPad4,4", "iPad mini 2 (WiFi)"),
    ("iPad4,5", "iPad mini 2 (Cellular)"),
    ("iPad4,6", "iPad mini 2 (China)"),
    ("iPad4,7", "iPad mini 3 (WiFi)"),
    ("iPad4,8", "iPad mini 3 (Cellular)"),
    ("iPad4,9", "iPad mini 3 (China)"),
    ("iPad5,1", "iPad mini 4 (WiFi)"),
    ("iPad5,2", "iPad mini 4 (Cellular)"),
    // Apple TV
    ("AppleTV2,1", "Apple TV 2nd Generation"),
    ("AppleTV3,1", "Apple TV 3rd Generation"),
    ("AppleTV3,2", "Apple TV 3rd Generation (Rev A)"),
    ("AppleTV5,3", "Apple TV 4th Generation"),
    ("AppleTV6,2", "Apple TV 4K"),
];

/// Marketing name for a hardware identifier, if known.
#[must_use]
pub fn lookup_model(identifier: &str) -> Option<&'static str> {
    HARDWARE_MODELS.iter().find(|(id, _)| *id == identifier).map(|&(_, name)| name)
}
