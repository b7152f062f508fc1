//! Template syntax parser
//!
//! Templates use brace-delimited placeholders (`{name}`). Literal braces are
//! written doubled (`{{` and `}}`), which keeps C++ block syntax readable
//! inside a template.

use std::collections::HashMap;

use crate::error::{Result, TemplateError};

/// Represents a parsed template element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateElement {
    /// Plain text content, with brace escapes already resolved
    Text(String),
    /// Placeholder: {name}
    Placeholder(String),
}

/// Parsed template structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// Template elements
    pub elements: Vec<TemplateElement>,
    /// Distinct placeholder names, in first-occurrence order
    pub placeholder_names: Vec<String>,
}

impl ParsedTemplate {
    /// Render the template by substituting every placeholder
    ///
    /// # Arguments
    /// * `bindings` - Value for each placeholder name
    ///
    /// # Returns
    /// Rendered text, or `MissingPlaceholder` for the first unbound name
    pub fn render(&self, bindings: &HashMap<&str, &str>) -> Result<String> {
        if let Some(name) = self
            .placeholder_names
            .iter()
            .find(|name| !bindings.contains_key(name.as_str()))
        {
            return Err(TemplateError::MissingPlaceholder(name.clone()));
        }

        Ok(self.substitute(|name| bindings.get(name).copied().unwrap_or_default()))
    }

    /// Render the template, asking `value_of` for each placeholder occurrence
    ///
    /// Callers guarantee that every placeholder has a value.
    pub fn substitute<'a, F>(&self, mut value_of: F) -> String
    where
        F: FnMut(&str) -> &'a str,
    {
        self.elements
            .iter()
            .map(|element| match element {
                TemplateElement::Text(text) => text.as_str(),
                TemplateElement::Placeholder(name) => value_of(name.as_str()),
            })
            .collect()
    }
}

/// Template parser
pub struct TemplateParser;

impl TemplateParser {
    /// Parse template content and extract structure
    ///
    /// # Arguments
    /// * `content` - Template content to parse
    ///
    /// # Returns
    /// Parsed template structure or error with line number
    pub fn parse(content: &str) -> Result<ParsedTemplate> {
        let mut parser = Parser::new(content);
        parser.parse()
    }

    /// Extract the distinct placeholder names, in first-occurrence order
    pub fn extract_placeholders(content: &str) -> Result<Vec<String>> {
        Ok(Self::parse(content)?.placeholder_names)
    }
}

/// Internal parser state machine
struct Parser {
    content: Vec<char>,
    position: usize,
    line: usize,
    placeholder_names: Vec<String>,
}

impl Parser {
    fn new(content: &str) -> Self {
        Self {
            content: content.chars().collect(),
            position: 0,
            line: 1,
            placeholder_names: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<ParsedTemplate> {
        let mut elements = Vec::new();
        let mut text = String::new();

        while let Some(ch) = self.peek_char() {
            match (ch, self.peek_ahead(1)) {
                ('{', Some('{')) | ('}', Some('}')) => {
                    self.position += 2;
                    text.push(ch);
                }
                ('{', _) => {
                    if !text.is_empty() {
                        elements.push(TemplateElement::Text(std::mem::take(&mut text)));
                    }
                    let name = self.parse_placeholder()?;
                    elements.push(TemplateElement::Placeholder(name));
                }
                ('}', _) => {
                    return Err(self.syntax_error("Single '}' encountered in template"));
                }
                _ => {
                    text.push(self.consume_char()?);
                }
            }
        }

        if !text.is_empty() {
            elements.push(TemplateElement::Text(text));
        }

        Ok(ParsedTemplate {
            elements,
            placeholder_names: std::mem::take(&mut self.placeholder_names),
        })
    }

    fn parse_placeholder(&mut self) -> Result<String> {
        self.consume_char()?; // {

        let mut name = String::new();
        loop {
            match self.peek_char() {
                Some('}') => {
                    self.position += 1;
                    break;
                }
                Some('!') | Some(':') => {
                    return Err(self.syntax_error("Conversions and format specs are not supported"));
                }
                Some('{') => {
                    return Err(self.syntax_error("Unexpected '{' in placeholder"));
                }
                Some(_) => name.push(self.consume_char()?),
                None => {
                    return Err(self.syntax_error("Unterminated placeholder, expected '}'"));
                }
            }
        }

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(self.syntax_error("Empty placeholder"));
        }

        if !self.placeholder_names.contains(&name) {
            self.placeholder_names.push(name.clone());
        }

        Ok(name)
    }

    fn peek_char(&self) -> Option<char> {
        self.content.get(self.position).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.content.get(self.position + offset).copied()
    }

    fn consume_char(&mut self) -> Result<char> {
        match self.peek_char() {
            Some(ch) => {
                self.position += 1;
                if ch == '\n' {
                    self.line += 1;
                }
                Ok(ch)
            }
            None => Err(self.syntax_error("Unexpected end of template")),
        }
    }

    fn syntax_error(&self, message: &str) -> TemplateError {
        TemplateError::InvalidSyntax {
            line: self.line,
            message: message.to_string(),
        }
    }
}
