//! Compilation orchestration.
//!
//! [`StyleCompiler`] resolves settings, walks the region catalog and
//! finalizes the document. Committed output is cached under a key derived
//! from the engine version and a digest of everything that shapes the
//! output; preview output is never cached.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use restyle_cache::{digest_hex, ClearScope, MetricsSnapshot, TieredCache};
use restyle_common::{merge_settings, CompileMode, SettingValue, SettingsMap};
use restyle_config::schema::EngineConfig;
use restyle_config::{defaults_map, SettingsResolver, SETTINGS_GROUP};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::document::DocumentBuilder;
use crate::emit::Emitter;
use crate::regions::{RegionContext, REGIONS};

/// Cache group holding compiled stylesheets.
pub const CSS_CACHE_GROUP: &str = "css";

/// Master switch; when falsy no region runs.
const ENABLED_KEY: &str = "restyle_enabled";

const FAILURE_COMMENT: &str = "/* restyle: compilation failed, see logs */\n";

/// What one compilation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub mode: CompileMode,
    pub rules_emitted: usize,
    pub rules_skipped: usize,
    pub raw_blocks: usize,
    pub regions_failed: Vec<String>,
    pub cache_hit: bool,
    pub bytes: usize,
}

impl CompileReport {
    fn new(mode: CompileMode) -> Self {
        Self {
            mode,
            rules_emitted: 0,
            rules_skipped: 0,
            raw_blocks: 0,
            regions_failed: Vec::new(),
            cache_hit: false,
            bytes: 0,
        }
    }
}

pub struct StyleCompiler {
    config: EngineConfig,
    resolver: Arc<dyn SettingsResolver>,
    cache: TieredCache,
}

impl StyleCompiler {
    pub fn new(config: EngineConfig, resolver: Arc<dyn SettingsResolver>, cache: TieredCache) -> Self {
        Self {
            config,
            resolver,
            cache,
        }
    }

    /// Build with the cache stack described by `config.cache`.
    pub fn from_config(config: EngineConfig, resolver: Arc<dyn SettingsResolver>) -> Self {
        let cache = TieredCache::from_config(&config.cache, None);
        Self::new(config, resolver, cache)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &TieredCache {
        &self.cache
    }

    /// Compile the stylesheet. With an overlay the compile runs in preview
    /// mode; without one it compiles the persisted settings.
    pub fn compile(&self, overlay: Option<&SettingsMap>) -> String {
        self.compile_with_report(overlay).0
    }

    pub fn compile_with_report(&self, overlay: Option<&SettingsMap>) -> (String, CompileReport) {
        let mode = if overlay.is_some() {
            CompileMode::Preview
        } else {
            CompileMode::Committed
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| self.run(mode, overlay)));
        match outcome {
            Ok(result) => result,
            Err(payload) => {
                error!(mode = %mode, panic = panic_message(&*payload), "css compilation failed");
                let product = &self.config.product;
                let header = DocumentBuilder::new(&product.name, &product.version, mode);
                let css = format!("{}{FAILURE_COMMENT}", header.header());
                let mut report = CompileReport::new(mode);
                report.bytes = css.len();
                (css, report)
            }
        }
    }

    fn run(&self, mode: CompileMode, overlay: Option<&SettingsMap>) -> (String, CompileReport) {
        let (defaults, settings) = self.resolve(overlay);

        if mode == CompileMode::Preview {
            return self.build(mode, &settings, &defaults);
        }

        let Some(key) = self.cache_key(mode, &settings) else {
            return self.build(mode, &settings, &defaults);
        };

        // Header-only output compiles to "" and is not worth a cache entry.
        let (css, built) = self.cache.remember_where(
            CSS_CACHE_GROUP,
            &key,
            None,
            || self.build(mode, &settings, &defaults),
            |css| !css.is_empty(),
        );
        match built {
            Some(report) => (css, report),
            None => {
                debug!(key = %key, bytes = css.len(), "compiled css served from cache");
                let mut report = CompileReport::new(mode);
                report.cache_hit = true;
                report.bytes = css.len();
                (css, report)
            }
        }
    }

    /// Defaults, and the settings map for this compile: defaults, then
    /// persisted values, then the overlay. Resolver failures degrade to the
    /// catalog defaults.
    fn resolve(&self, overlay: Option<&SettingsMap>) -> (SettingsMap, SettingsMap) {
        let defaults = match self.resolver.get_defaults(SETTINGS_GROUP) {
            Ok(defaults) if !defaults.is_empty() => defaults,
            Ok(_) => defaults_map().clone(),
            Err(e) => {
                warn!(error = %e, "settings defaults unavailable, using built-in defaults");
                defaults_map().clone()
            }
        };
        let persisted = self
            .resolver
            .get_settings(SETTINGS_GROUP)
            .unwrap_or_else(|e| {
                warn!(error = %e, "persisted settings unavailable, compiling defaults");
                SettingsMap::new()
            });

        let mut settings = merge_settings(&defaults, &persisted);
        if let Some(overlay) = overlay {
            settings = merge_settings(&settings, overlay);
        }
        (defaults, settings)
    }

    /// `<mode>:v<version>:<digest>`, where the digest covers the resolved
    /// settings and the limits and targets that shape the output.
    fn cache_key(&self, mode: CompileMode, settings: &SettingsMap) -> Option<String> {
        let fingerprint = (settings, &self.config.limits, &self.config.specificity);
        match serde_json::to_string(&fingerprint) {
            Ok(json) => Some(format!(
                "{}:v{}:{}",
                mode.tag(),
                self.config.product.version,
                digest_hex(&json)
            )),
            Err(e) => {
                warn!(error = %e, "cannot fingerprint settings, compiling uncached");
                None
            }
        }
    }

    fn build(
        &self,
        mode: CompileMode,
        settings: &SettingsMap,
        defaults: &SettingsMap,
    ) -> (String, CompileReport) {
        let started = Instant::now();
        let product = &self.config.product;
        let mut doc = DocumentBuilder::new(&product.name, &product.version, mode);
        let mut report = CompileReport::new(mode);

        let enabled = settings
            .get(ENABLED_KEY)
            .filter(|v| !v.is_null())
            .is_none_or(SettingValue::is_truthy);

        if enabled {
            let emitter = Emitter::new(settings, defaults, mode, &self.config);
            for region in REGIONS {
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    let mut ctx = RegionContext::new(emitter, &mut doc, region.name);
                    (region.build)(&mut ctx)
                }));
                match outcome {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        warn!(region = region.name, error = %e, "style region failed");
                        doc.append_comment(&format!("restyle: region {} failed: {e}", region.name));
                        report.regions_failed.push(region.name.to_string());
                    }
                    Err(payload) => {
                        error!(
                            region = region.name,
                            panic = panic_message(&*payload),
                            "style region panicked"
                        );
                        doc.append_comment(&format!(
                            "restyle: region {} failed, see logs",
                            region.name
                        ));
                        report.regions_failed.push(region.name.to_string());
                    }
                }
            }
        } else {
            debug!("styling disabled, emitting no rules");
        }

        let stats = doc.stats();
        report.rules_emitted = stats.rules;
        report.rules_skipped = stats.skipped;
        report.raw_blocks = stats.raw_blocks;

        let css = if mode == CompileMode::Committed && doc.is_header_only() {
            String::new()
        } else {
            doc.finalize(self.config.limits.max_document_bytes)
        };
        report.bytes = css.len();

        info!(
            mode = %mode,
            rules = report.rules_emitted,
            skipped = report.rules_skipped,
            raw = report.raw_blocks,
            failed = report.regions_failed.len(),
            bytes = report.bytes,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "css compiled"
        );
        (css, report)
    }

    /// Clear cached output. `all` (or `*`) clears everything, a name ending
    /// in `*` clears by key prefix, anything else names a cache group.
    pub fn invalidate(&self, scope: &str) -> usize {
        let scope = match scope.trim() {
            "" | "all" | "*" => ClearScope::All,
            pattern if pattern.ends_with('*') => ClearScope::Pattern(pattern.to_string()),
            group => ClearScope::Group(group.to_string()),
        };
        let removed = self.cache.clear(&scope);
        info!(?scope, removed, "css cache invalidated");
        removed
    }

    pub fn get_cache_metrics(&self) -> MetricsSnapshot {
        self.cache.metrics()
    }

    /// Drop expired cache entries in every tier.
    pub fn sweep(&self) -> usize {
        self.cache.sweep()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
