/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".pdf"）
///
/// # Returns
/// * `true` - 魔术字节匹配或该类型不需要验证
/// * `false` - 魔术字节不匹配
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        // 文档格式
        ".pdf" => data.starts_with(b"%PDF"),
        ".doc" => {
            // MS Office 旧格式 (OLE Compound Document)
            data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        }
        ".docx" => {
            // MS Office 新格式 (ZIP-based OOXML)
            data.starts_with(&[0x50, 0x4B, 0x03, 0x04])
        }

        // 文本格式 - 不检查魔术字节
        ".txt" | ".md" => true,

        // 未知格式 - 默认拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic() {
        let pdf_header = b"%PDF-1.4";
        assert!(validate_magic_bytes(pdf_header, ".pdf"));
        assert!(validate_magic_bytes(pdf_header, ".PDF"));
        assert!(!validate_magic_bytes(pdf_header, ".doc"));
    }

    #[test]
    fn test_non_pdf_content_rejected() {
        let html = b"<!doctype html>";
        assert!(!validate_magic_bytes(html, ".pdf"));
    }

    #[test]
    fn test_text_files() {
        let text_content = b"Hello, World!";
        assert!(validate_magic_bytes(text_content, ".txt"));
        assert!(validate_magic_bytes(text_content, ".md"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".pdf"));
        assert!(!validate_magic_bytes(&[], ".txt"));
    }

    #[test]
    fn test_unknown_extension() {
        let data = [0x00, 0x01, 0x02, 0x03];
        assert!(!validate_magic_bytes(&data, ".exe"));
        assert!(!validate_magic_bytes(&data, ".unknown"));
    }
}
