//! Static declaration of the options form.

use crate::binding::{EditorBinding, TextBinding, ToggleBinding};
use crate::domain::{SyntaxMode, WidgetId};

/// Every binding the options panel carries, declared once at startup.
pub struct OptionsForm {
    pub host: TextBinding,
    pub token: TextBinding,
    pub verbose_errors: ToggleBinding,
    pub contexts_popup: ToggleBinding,
    pub detect_sidebar_urls: ToggleBinding,
    pub highlight: ToggleBinding,
    pub blacklist: EditorBinding,
    pub filterlists: EditorBinding,
    pub src_map: EditorBinding,
    pub position_css: EditorBinding,
    pub extra_css: EditorBinding,
}

impl OptionsForm {
    pub const fn new() -> Self {
        Self {
            host: TextBinding::new(WidgetId("host_id")),
            token: TextBinding::new(WidgetId("token_id")),
            verbose_errors: ToggleBinding::new(WidgetId("verbose_errors_id")),
            contexts_popup: ToggleBinding::new(WidgetId("contexts_popup_id")),
            detect_sidebar_urls: ToggleBinding::new(WidgetId("detect_sidebar_urls_id")),
            highlight: ToggleBinding::new(WidgetId("highlight_id")),
            blacklist: EditorBinding::new(WidgetId("blacklist_id")),
            filterlists: EditorBinding::with_mode(WidgetId("filterlists_id"), SyntaxMode::Json),
            src_map: EditorBinding::with_mode(WidgetId("source_map_id"), SyntaxMode::Json),
            position_css: EditorBinding::with_mode(WidgetId("position_css_id"), SyntaxMode::Css),
            extra_css: EditorBinding::with_mode(WidgetId("extra_css_id"), SyntaxMode::Css),
        }
    }

    /// Every widget id the form binds, for wiring up a widget host.
    pub fn widget_ids(&self) -> [WidgetId; 11] {
        use crate::binding::Binding;
        [
            self.host.id(),
            self.token.id(),
            self.verbose_errors.id(),
            self.contexts_popup.id(),
            self.detect_sidebar_urls.id(),
            self.highlight.id(),
            self.blacklist.id(),
            self.filterlists.id(),
            self.src_map.id(),
            self.position_css.id(),
            self.extra_css.id(),
        ]
    }

    /// Editor-backed bindings, in bind order.
    pub fn editors(&self) -> [&EditorBinding; 5] {
        [
            &self.blacklist,
            &self.filterlists,
            &self.src_map,
            &self.position_css,
            &self.extra_css,
        ]
    }
}

impl Default for OptionsForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use std::collections::HashSet;

    #[test]
    fn widget_ids_are_unique() {
        let form = OptionsForm::new();
        let ids: HashSet<_> = form.widget_ids().into_iter().collect();
        assert_eq!(ids.len(), form.widget_ids().len());
    }

    #[test]
    fn editor_modes_match_their_content() {
        let form = OptionsForm::new();
        assert_eq!(form.blacklist.mode(), SyntaxMode::Plaintext);
        assert_eq!(form.filterlists.mode(), SyntaxMode::Json);
        assert_eq!(form.src_map.mode(), SyntaxMode::Json);
        assert_eq!(form.position_css.mode(), SyntaxMode::Css);
        assert_eq!(form.extra_css.mode(), SyntaxMode::Css);
    }

    #[test]
    fn editors_cover_all_editor_widgets() {
        let form = OptionsForm::new();
        let ids: Vec<_> = form.editors().iter().map(|b| b.id()).collect();
        assert_eq!(
            ids,
            [
                WidgetId("blacklist_id"),
                WidgetId("filterlists_id"),
                WidgetId("source_map_id"),
                WidgetId("position_css_id"),
                WidgetId("extra_css_id"),
            ]
        );
    }
}
