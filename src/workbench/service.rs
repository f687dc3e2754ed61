use crate::Result;
use crate::host::{
    DefinitionInfoAndBoundSpan, LanguageService, LanguageServiceFactory, LanguageServiceHost,
    QuickInfo, ScriptElementKind, TextSpan,
};
use std::sync::Arc;

/// Minimal language service with no checker behind it.
///
/// Everything it answers comes from the provider it was built over, which
/// makes it a faithful observer of what that provider serves.
pub struct WorkbenchService {
    host: Arc<dyn LanguageServiceHost>,
}

impl WorkbenchService {
    pub fn new(host: Arc<dyn LanguageServiceHost>) -> Self {
        Self { host }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Byte span of the identifier touching `position`, if any.
fn word_at(text: &str, position: usize) -> Option<TextSpan> {
    if position > text.len() || !text.is_char_boundary(position) {
        return None;
    }

    let start = text[..position]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(position);
    let end = text[position..]
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map(|(i, _)| position + i)
        .unwrap_or(text.len());

    (end > start).then(|| TextSpan::new(start, end - start))
}

impl LanguageService for WorkbenchService {
    fn get_definition_and_bound_span(
        &self,
        _file_name: &str,
        _position: usize,
    ) -> Result<Option<DefinitionInfoAndBoundSpan>> {
        Ok(None)
    }

    fn get_quick_info_at_position(&self, file_name: &str, position: usize) -> Result<Option<QuickInfo>> {
        let Some(snapshot) = self.host.get_script_snapshot(file_name)? else {
            return Ok(None);
        };

        Ok(word_at(snapshot.text(), position).map(|span| QuickInfo {
            kind: ScriptElementKind::Unknown,
            text_span: span,
            display: format!(
                "{} ({})",
                snapshot.get_text(span.start, span.end()),
                self.host.get_script_kind(file_name)
            ),
        }))
    }

    fn get_program_file_names(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        for file in self.host.get_script_file_names() {
            if self.host.get_script_snapshot(&file)?.is_some() {
                files.push(file);
            }
        }
        Ok(files)
    }
}

/// Tooling API handing out [`WorkbenchService`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbenchServiceFactory;

impl LanguageServiceFactory for WorkbenchServiceFactory {
    fn create_language_service(&self, host: Arc<dyn LanguageServiceHost>) -> Box<dyn LanguageService> {
        Box::new(WorkbenchService::new(host))
    }
}
