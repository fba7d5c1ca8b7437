use encoding_rs::{Encoding, GBK, REPLACEMENT, UTF_16BE, UTF_16LE, UTF_8};
use crate::error::ConversionError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const UTF16LE_BOM: &[u8] = b"\xFF\xFE";
const UTF16BE_BOM: &[u8] = b"\xFE\xFF";

/// WHATWG 將 ascii / latin1 視為 windows-1252，因此這兩者自行處理
#[derive(Debug, Clone, Copy)]
enum Scheme {
    Whatwg(&'static Encoding),
    Utf8Sig,
    /// 依 BOM 判斷位元組順序；寫出時加上 `FF FE` 並使用小端序
    Utf16,
    Ascii,
    Latin1,
}

/// 已解析的文字編碼，解碼與編碼皆為嚴格模式（不插入替代字元）
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    scheme: Scheme,
}

impl Codec {
    /// 依名稱查找編碼，例如 `gbk`、`utf-8`、`utf-16le`、`big5`、`shift_jis`、`latin-1`
    pub fn for_label(label: &str) -> Result<Codec, ConversionError> {
        let normalized = label.trim().to_ascii_lowercase();
        let hyphenated = normalized.replace('_', "-");

        let scheme = match hyphenated.as_str() {
            "utf-8-sig" | "utf8-sig" => Scheme::Utf8Sig,
            "utf-16" | "utf16" => Scheme::Utf16,
            "ascii" | "us-ascii" | "646" => Scheme::Ascii,
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" | "8859" => Scheme::Latin1,
            "cp936" => Scheme::Whatwg(GBK),
            _ => Encoding::for_label(normalized.as_bytes())
                .or_else(|| Encoding::for_label(hyphenated.as_bytes()))
                .filter(|encoding| *encoding != REPLACEMENT)
                .map(Scheme::Whatwg)
                .ok_or_else(|| ConversionError::Encoding {
                    message: format!("不支援的編碼 '{}'", label),
                })?,
        };

        Ok(Codec { scheme })
    }

    pub fn name(&self) -> &'static str {
        match self.scheme {
            Scheme::Whatwg(encoding) => encoding.name(),
            Scheme::Utf8Sig => "UTF-8-SIG",
            Scheme::Utf16 => "UTF-16",
            Scheme::Ascii => "ASCII",
            Scheme::Latin1 => "ISO-8859-1",
        }
    }

    /// 嚴格解碼；遇到無效位元組序列時回傳 `None`
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self.scheme {
            Scheme::Whatwg(encoding) => strict_decode(encoding, bytes),
            Scheme::Utf8Sig => strict_decode(UTF_8, bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)),
            Scheme::Utf16 => {
                if let Some(rest) = bytes.strip_prefix(UTF16BE_BOM) {
                    strict_decode(UTF_16BE, rest)
                } else {
                    strict_decode(UTF_16LE, bytes.strip_prefix(UTF16LE_BOM).unwrap_or(bytes))
                }
            }
            Scheme::Ascii => bytes
                .is_ascii()
                .then(|| bytes.iter().map(|&b| b as char).collect()),
            Scheme::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// 嚴格編碼；目標編碼無法表示的字元會回傳該字元
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, char> {
        match self.scheme {
            Scheme::Utf8Sig => {
                let mut out = Vec::with_capacity(text.len() + UTF8_BOM.len());
                out.extend_from_slice(UTF8_BOM);
                out.extend_from_slice(text.as_bytes());
                Ok(out)
            }
            Scheme::Utf16 => {
                let mut out = UTF16LE_BOM.to_vec();
                out.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
                Ok(out)
            }
            Scheme::Ascii => single_byte(text, 0x7F),
            Scheme::Latin1 => single_byte(text, 0xFF),
            Scheme::Whatwg(encoding) if encoding == UTF_16LE => {
                Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
            }
            Scheme::Whatwg(encoding) if encoding == UTF_16BE => {
                Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect())
            }
            Scheme::Whatwg(encoding) if encoding == UTF_8 => Ok(text.as_bytes().to_vec()),
            Scheme::Whatwg(encoding) => {
                let (encoded, _, had_unmappable) = encoding.encode(text);
                if had_unmappable {
                    return Err(first_unmappable(encoding, text));
                }
                Ok(encoded.into_owned())
            }
        }
    }
}

fn strict_decode(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// 每個字元對應一個位元組（碼位即位元組值），超過 `max` 的字元無法表示
fn single_byte(text: &str, max: u32) -> Result<Vec<u8>, char> {
    text.chars()
        .map(|c| u8::try_from(c as u32).ok().filter(|&b| u32::from(b) <= max).ok_or(c))
        .collect()
}

fn first_unmappable(encoding: &'static Encoding, text: &str) -> char {
    let mut buf = [0u8; 4];
    text.chars()
        .find(|c| encoding.encode(c.encode_utf8(&mut buf)).2)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive_and_accept_python_spellings() {
        assert_eq!(Codec::for_label("GBK").unwrap().name(), "GBK");
        assert_eq!(Codec::for_label(" utf-8 ").unwrap().name(), "UTF-8");
        assert_eq!(Codec::for_label("utf_8").unwrap().name(), "UTF-8");
        assert_eq!(Codec::for_label("cp936").unwrap().name(), "GBK");
        assert_eq!(Codec::for_label("utf-8-sig").unwrap().name(), "UTF-8-SIG");
        assert_eq!(Codec::for_label("latin-1").unwrap().name(), "ISO-8859-1");
        assert_eq!(Codec::for_label("latin_1").unwrap().name(), "ISO-8859-1");
    }

    #[test]
    fn ascii_and_latin1_are_not_windows_1252() {
        for label in ["ascii", "us-ascii", "US_ASCII"] {
            assert_eq!(Codec::for_label(label).unwrap().name(), "ASCII", "{}", label);
        }
        for label in ["latin1", "iso-8859-1", "ISO_8859_1", "l1"] {
            assert_eq!(Codec::for_label(label).unwrap().name(), "ISO-8859-1", "{}", label);
        }
        assert_eq!(Codec::for_label("windows-1252").unwrap().name(), "windows-1252");
    }

    #[test]
    fn unknown_label_is_an_encoding_error() {
        let err = Codec::for_label("not-a-real-codec").unwrap_err();
        assert!(matches!(err, ConversionError::Encoding { .. }));
        assert!(err.to_string().contains("not-a-real-codec"));
    }

    #[test]
    fn decodes_gbk_bytes() {
        let codec = Codec::for_label("gbk").unwrap();
        // "中文"
        let bytes = [0xD6, 0xD0, 0xCE, 0xC4];
        assert_eq!(codec.decode(&bytes).as_deref(), Some("中文"));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let codec = Codec::for_label("utf-8").unwrap();
        assert_eq!(codec.decode(&[0x66, 0xFF, 0x66]), None);
    }

    #[test]
    fn ascii_rejects_high_bytes_and_characters() {
        let codec = Codec::for_label("ascii").unwrap();
        assert_eq!(codec.decode(b"cafe").as_deref(), Some("cafe"));
        assert_eq!(codec.decode(&[0x63, 0x61, 0x66, 0xE9]), None);
        assert_eq!(codec.decode(&[0x80]), None);
        assert_eq!(codec.encode("cafe").unwrap(), b"cafe");
        assert_eq!(codec.encode("5 €"), Err('€'));
        assert_eq!(codec.encode("café"), Err('é'));
    }

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        let codec = Codec::for_label("iso-8859-1").unwrap();
        assert_eq!(codec.decode(&[0x63, 0x61, 0x66, 0xE9]).as_deref(), Some("café"));
        assert_eq!(codec.decode(&[0x80]).as_deref(), Some("\u{80}"));
        assert_eq!(codec.encode("café").unwrap(), vec![0x63, 0x61, 0x66, 0xE9]);
        assert_eq!(codec.encode("ÿ").unwrap(), vec![0xFF]);
        assert_eq!(codec.encode("5 €"), Err('€'));
    }

    #[test]
    fn utf16_is_encoded_explicitly() {
        let le = Codec::for_label("utf-16le").unwrap();
        let be = Codec::for_label("utf-16be").unwrap();
        assert_eq!(le.encode("A中").unwrap(), vec![0x41, 0x00, 0x2D, 0x4E]);
        assert_eq!(be.encode("A中").unwrap(), vec![0x00, 0x41, 0x4E, 0x2D]);
        assert_eq!(le.decode(&[0x41, 0x00, 0x2D, 0x4E]).as_deref(), Some("A中"));
    }

    #[test]
    fn plain_utf16_follows_the_byte_order_mark() {
        let codec = Codec::for_label("utf-16").unwrap();
        assert_eq!(codec.decode(&[0xFE, 0xFF, 0x00, 0x41]).as_deref(), Some("A"));
        assert_eq!(codec.decode(&[0xFF, 0xFE, 0x41, 0x00]).as_deref(), Some("A"));
        assert_eq!(codec.decode(&[0x41, 0x00]).as_deref(), Some("A"));
        assert_eq!(codec.encode("A").unwrap(), vec![0xFF, 0xFE, 0x41, 0x00]);
        assert_eq!(Codec::for_label("utf_16").unwrap().name(), "UTF-16");
    }

    #[test]
    fn utf8_sig_writes_and_strips_bom() {
        let codec = Codec::for_label("utf-8-sig").unwrap();
        let encoded = codec.encode("hi").unwrap();
        assert_eq!(encoded, b"\xEF\xBB\xBFhi");
        assert_eq!(codec.decode(&encoded).as_deref(), Some("hi"));
    }

    #[test]
    fn unmappable_character_is_reported() {
        let codec = Codec::for_label("shift_jis").unwrap();
        assert_eq!(codec.encode("ok 😀"), Err('😀'));
    }
}
