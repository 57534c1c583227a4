//! Load/save/probe orchestration for the settings panel.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::binding::Binding;
use crate::domain::FieldValue;
use crate::editor;
use crate::notify::{report_failure, Notifier};
use crate::probe::{StatusProbe, TROUBLESHOOTING_URL};
use crate::settings::{Settings, SettingsStore};
use crate::widget::WidgetHost;

use super::{OptionsForm, PanelSurface};

/// Drives the panel through its two transitions - load and save - plus the
/// user-triggered backend check.
///
/// Each public handler catches its own failures and routes them to the
/// notification surface; the controller is always usable afterward.
pub struct SettingsController<S, W: WidgetHost> {
    store: S,
    form: OptionsForm,
    surface: PanelSurface<W>,
    probe: StatusProbe,
    notifier: Arc<dyn Notifier>,
}

impl<S: SettingsStore, W: WidgetHost> SettingsController<S, W> {
    pub fn new(store: S, widgets: W, notifier: Arc<dyn Notifier>) -> Result<Self> {
        Ok(Self {
            store,
            form: OptionsForm::new(),
            surface: PanelSurface::new(widgets),
            probe: StatusProbe::new()?,
            notifier,
        })
    }

    pub fn form(&self) -> &OptionsForm {
        &self.form
    }

    pub fn surface(&self) -> &PanelSurface<W> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut PanelSurface<W> {
        &mut self.surface
    }

    /// Populate every binding from the stored settings.
    pub async fn open(&mut self) {
        let outcome = self.load().await;
        report_failure(self.notifier.as_ref(), outcome);
    }

    async fn load(&mut self) -> Result<()> {
        let opts = self.store.load().await.context("failed to load settings")?;
        let form = &self.form;
        let surface = &mut self.surface;

        form.host.set(surface, &opts.host)?;
        form.token.set(surface, &opts.token)?;
        form.verbose_errors.set(surface, opts.verbose_errors_on)?;
        form.contexts_popup.set(surface, opts.contexts_popup_on)?;
        form.detect_sidebar_urls.set(surface, opts.detect_sidebar_urls)?;
        form.highlight.set(surface, opts.highlight_on)?;

        // Editor fields need the one-time setup; nothing below runs before
        // the factory is ready.
        let factory = editor::editor_factory().await?;
        surface.widgets_mut().install_stylesheet(factory.stylesheet());

        let editors = [
            (&form.blacklist, &opts.blacklist),
            (&form.filterlists, &opts.filterlists),
            (&form.src_map, &opts.src_map),
            (&form.position_css, &opts.position_css),
            (&form.extra_css, &opts.extra_css),
        ];
        // Every editor is bound before any value lands in one.
        for (binding, _) in editors {
            binding.bind(surface, factory)?;
        }
        for (binding, value) in editors {
            binding.write(surface, FieldValue::Text(value.clone()))?;
        }

        Ok(())
    }

    /// Persist the current state of every binding.
    pub async fn save(&mut self) {
        match self.persist().await {
            Ok(()) => self.notifier.info("Saved!"),
            Err(err) => self.notifier.error(&format!("{err:#}")),
        }
    }

    async fn persist(&self) -> Result<()> {
        let opts = self.collect().context("failed to read panel state")?;
        self.store
            .save(&opts)
            .await
            .context("failed to save settings")?;
        Ok(())
    }

    /// Snapshot every binding, plus the constant fields, into a settings
    /// object.
    fn collect(&self) -> Result<Settings> {
        let form = &self.form;
        let surface = &self.surface;
        Ok(Settings {
            host: form.host.get(surface)?,
            token: form.token.get(surface)?,
            verbose_errors_on: form.verbose_errors.get(surface)?,
            contexts_popup_on: form.contexts_popup.get(surface)?,
            detect_sidebar_urls: form.detect_sidebar_urls.get(surface)?,
            highlight_on: form.highlight.get(surface)?,
            // Not widget-backed; always stored as set.
            dots: true,
            blacklist: form.blacklist.get(surface)?,
            filterlists: form.filterlists.get(surface)?,
            src_map: form.src_map.get(surface)?,
            position_css: form.position_css.get(surface)?,
            extra_css: form.extra_css.get(surface)?,
        })
    }

    /// Probe the configured backend and report the outcome.
    ///
    /// Every failure - probe or binding - renders as one message with the
    /// troubleshooting pointer attached.
    pub async fn check_backend(&self) {
        match self.backend_status().await {
            Ok(body) => self.notifier.info(&format!("Success! {body}")),
            Err(err) => self
                .notifier
                .error(&format!("{err:#}. See {TROUBLESHOOTING_URL}")),
        }
    }

    async fn backend_status(&self) -> Result<serde_json::Value> {
        let host = self.form.host.get(&self.surface)?;
        let token = self.form.token.get(&self.surface)?;
        Ok(self.probe.check(&host, &token).await?)
    }
}
