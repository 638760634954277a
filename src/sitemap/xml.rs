// src/sitemap/xml.rs
// =============================================================================
// Writes a Sitemap as a sitemaps.org XML document:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//     </url>
//   </urlset>
//
// quick-xml's serde Serializer does the element layout and escaping. The
// structs below only describe the document shape; Sitemap itself stays a
// plain list so its JSON form is not affected by XML naming rules.
// =============================================================================

use std::io::{self, Write};

use serde::Serialize;

use super::Sitemap;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
struct Urlset<'a> {
    // "@" marks an attribute for quick-xml
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
    url: Vec<UrlEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct UrlEntry<'a> {
    loc: &'a str,
}

impl Sitemap {
    /// Renders the full document, header included.
    pub fn to_xml(&self) -> io::Result<String> {
        let urlset = Urlset {
            xmlns: self.namespace,
            url: self.urls.iter().map(|loc| UrlEntry { loc }).collect(),
        };

        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        serializer.indent(' ', 2);
        urlset
            .serialize(serializer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(format!("{XML_HEADER}\n{body}\n"))
    }

    pub fn write_xml<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.to_xml()?.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sitemap(urls: &[&str]) -> Sitemap {
        let visited: HashSet<String> = urls.iter().map(|u| u.to_string()).collect();
        Sitemap::assemble(visited)
    }

    #[test]
    fn test_xml_document() {
        let xml = sitemap(&["https://a.example/", "https://a.example/about"]).to_xml().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("  <url>\n    <loc>https://a.example/</loc>\n  </url>"));
        assert!(xml.contains("  <url>\n    <loc>https://a.example/about</loc>\n  </url>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_entries_keep_sitemap_order() {
        let xml = sitemap(&["https://a.example/z", "https://a.example/a"]).to_xml().unwrap();
        let a = xml.find("https://a.example/a").unwrap();
        let z = xml.find("https://a.example/z").unwrap();
        assert!(a < z);
    }

    #[test]
    fn test_empty_urlset() {
        let xml = sitemap(&[]).to_xml().unwrap();
        assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_loc_is_escaped() {
        let xml = sitemap(&["https://a.example/?a=1&b=2"]).to_xml().unwrap();
        assert!(xml.contains("<loc>https://a.example/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_write_xml_matches_to_xml() {
        let map = sitemap(&["https://a.example/"]);
        let mut buf = Vec::new();
        map.write_xml(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), map.to_xml().unwrap());
    }
}
