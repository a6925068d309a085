// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minimal XML pull scanner for SBML documents.
//!
//! This deliberately covers only what SBML model files need: start/end tags
//! with attributes. Text content, comments, processing instructions, CDATA,
//! and DOCTYPE are skipped. Attribute values are entity-unescaped.

use std::fmt;

use memchr::memchr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    UnexpectedEof { context: &'static str },
    MalformedTag { pos: usize },
    UnterminatedComment { pos: usize },
    UnterminatedAttribute { pos: usize },
    InvalidEntity { entity: String },
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof { context } => {
                write!(f, "unexpected end of input while reading {context}")
            }
            Self::MalformedTag { pos } => write!(f, "malformed tag at byte {pos}"),
            Self::UnterminatedComment { pos } => write!(f, "unterminated comment at byte {pos}"),
            Self::UnterminatedAttribute { pos } => {
                write!(f, "unterminated attribute value at byte {pos}")
            }
            Self::InvalidEntity { entity } => write!(f, "invalid entity reference: &{entity};"),
        }
    }
}

impl std::error::Error for XmlError {}

/// An opening tag with its (unescaped) attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag<'a> {
    name: &'a str,
    attrs: Vec<(&'a str, String)>,
    self_closing: bool,
}

impl<'a> StartTag<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| *attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attrs(&self) -> &[(&'a str, String)] {
        &self.attrs
    }

    pub fn self_closing(&self) -> bool {
        self.self_closing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent<'a> {
    Start(StartTag<'a>),
    End(&'a str),
}

/// Splits a possibly-prefixed tag or attribute name into `(prefix, local)`.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (prefix, local),
        None => ("", name),
    }
}

pub struct XmlScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> XmlScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the next tag event, or `None` at end of input.
    pub fn next_event(&mut self) -> Result<Option<XmlEvent<'a>>, XmlError> {
        loop {
            let bytes = self.input.as_bytes();
            let Some(offset) = memchr(b'<', &bytes[self.pos..]) else {
                // Trailing text (usually whitespace) is skipped.
                self.pos = self.input.len();
                return Ok(None);
            };
            let tag_start = self.pos + offset;
            let rest = &self.input[tag_start..];

            if rest.starts_with("<!--") {
                match rest.find("-->") {
                    Some(end) => {
                        self.pos = tag_start + end + 3;
                        continue;
                    }
                    None => return Err(XmlError::UnterminatedComment { pos: tag_start }),
                }
            }
            if rest.starts_with("<![CDATA[") {
                match rest.find("]]>") {
                    Some(end) => {
                        self.pos = tag_start + end + 3;
                        continue;
                    }
                    None => return Err(XmlError::UnexpectedEof { context: "CDATA section" }),
                }
            }
            if rest.starts_with("<?") {
                match rest.find("?>") {
                    Some(end) => {
                        self.pos = tag_start + end + 2;
                        continue;
                    }
                    None => {
                        return Err(XmlError::UnexpectedEof { context: "processing instruction" })
                    }
                }
            }
            if rest.starts_with("<!") {
                match rest.find('>') {
                    Some(end) => {
                        self.pos = tag_start + end + 1;
                        continue;
                    }
                    None => return Err(XmlError::UnexpectedEof { context: "declaration" }),
                }
            }
            if let Some(rest) = rest.strip_prefix("</") {
                let end = rest
                    .find('>')
                    .ok_or(XmlError::UnexpectedEof { context: "closing tag" })?;
                let name = rest[..end].trim();
                if name.is_empty() {
                    return Err(XmlError::MalformedTag { pos: tag_start });
                }
                self.pos = tag_start + 2 + end + 1;
                return Ok(Some(XmlEvent::End(name)));
            }

            let end = self.find_tag_end(tag_start)?;
            let tag = self.parse_start_tag(tag_start, end)?;
            self.pos = end + 1;
            return Ok(Some(XmlEvent::Start(tag)));
        }
    }

    /// Finds the `>` closing the tag opened at `tag_start`, ignoring `>`
    /// inside quoted attribute values.
    fn find_tag_end(&self, tag_start: usize) -> Result<usize, XmlError> {
        let bytes = self.input.as_bytes();
        let mut quote: Option<u8> = None;
        let mut idx = tag_start + 1;
        while idx < bytes.len() {
            let byte = bytes[idx];
            match quote {
                Some(open) => {
                    if byte == open {
                        quote = None;
                    }
                }
                None => match byte {
                    b'"' | b'\'' => quote = Some(byte),
                    b'>' => return Ok(idx),
                    _ => {}
                },
            }
            idx += 1;
        }
        Err(XmlError::UnexpectedEof { context: "opening tag" })
    }

    fn parse_start_tag(&self, tag_start: usize, tag_end: usize) -> Result<StartTag<'a>, XmlError> {
        let mut content = self.input[tag_start + 1..tag_end].trim_end();
        let self_closing = content.ends_with('/');
        if self_closing {
            content = content[..content.len() - 1].trim_end();
        }

        let name_end = content
            .find(|ch: char| ch.is_whitespace())
            .unwrap_or(content.len());
        let name = &content[..name_end];
        if name.is_empty() {
            return Err(XmlError::MalformedTag { pos: tag_start });
        }

        let mut attrs = Vec::new();
        let mut rest = content[name_end..].trim_start();
        while !rest.is_empty() {
            let eq = rest
                .find('=')
                .ok_or(XmlError::MalformedTag { pos: tag_start })?;
            let attr_name = rest[..eq].trim_end();
            if attr_name.is_empty() || attr_name.chars().any(char::is_whitespace) {
                return Err(XmlError::MalformedTag { pos: tag_start });
            }
            let after_eq = rest[eq + 1..].trim_start();
            let mut chars = after_eq.chars();
            let open = match chars.next() {
                Some(ch @ ('"' | '\'')) => ch,
                _ => return Err(XmlError::MalformedTag { pos: tag_start }),
            };
            let value_raw = chars.as_str();
            let close = value_raw
                .find(open)
                .ok_or(XmlError::UnterminatedAttribute { pos: tag_start })?;
            let value = unescape(&value_raw[..close])?;
            attrs.push((attr_name, value));
            rest = value_raw[close + open.len_utf8()..].trim_start();
        }

        Ok(StartTag {
            name,
            attrs,
            self_closing,
        })
    }
}

fn unescape(raw: &str) -> Result<String, XmlError> {
    if !raw.contains('&') {
        return Ok(raw.to_owned());
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        let semi = tail
            .find(';')
            .ok_or_else(|| XmlError::InvalidEntity { entity: tail.to_owned() })?;
        let entity = &tail[..semi];
        match entity {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let code = entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                    .and_then(Result::ok)
                    .and_then(char::from_u32)
                    .ok_or_else(|| XmlError::InvalidEntity { entity: entity.to_owned() })?;
                out.push(code);
            }
        }
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
