//! Encoding label lookup.
//!
//! `encoding_rs` only knows WHATWG labels. Windows code page names used by
//! spreadsheet tools (`cp932`, `cp1252`, ...) are mapped onto them first.

use encoding_rs::Encoding;

/// Windows code page aliases missing from the WHATWG label set.
const CODE_PAGE_ALIASES: &[(&str, &str)] = &[
    ("cp932", "windows-31j"),
    ("ms932", "windows-31j"),
    ("cp936", "gbk"),
    ("cp949", "euc-kr"),
    ("cp950", "big5"),
    ("cp1250", "windows-1250"),
    ("cp1251", "windows-1251"),
    ("cp1252", "windows-1252"),
    ("cp65001", "utf-8"),
];

/// Resolve an encoding label, accepting Windows code page aliases.
#[must_use]
pub fn lookup_encoding(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    let canonical = CODE_PAGE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(label))
        .map_or(label, |(_, whatwg)| whatwg);
    Encoding::for_label(canonical.as_bytes())
}
