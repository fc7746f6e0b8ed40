//! Industry benchmark catalog.
//!
//! Each preset bundles the default metric values used to prefill the
//! calculator form for one industry vertical. The catalog is static and
//! read-only; its order is the display order of the industry selector.

use serde::Serialize;

/// A named bundle of default metric values for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkPreset {
    /// Display label, unique within the catalog.
    pub name: &'static str,
    /// Assumed cost-per-click in dollars.
    pub default_cpc: f64,
    /// Assumed cost-per-lead in dollars.
    pub default_cpl: f64,
    /// Assumed monthly organic visits.
    pub default_traffic: u32,
    /// Assumed visitor-to-lead conversion rate, in percent.
    pub default_conversion: f64,
    /// Assumed share of queries migrating to AI answer engines, in percent.
    pub ai_shift: f64,
}

impl BenchmarkPreset {
    const fn new(
        name: &'static str,
        default_cpc: f64,
        default_cpl: f64,
        default_traffic: u32,
        default_conversion: f64,
        ai_shift: f64,
    ) -> Self {
        Self {
            name,
            default_cpc,
            default_cpl,
            default_traffic,
            default_conversion,
            ai_shift,
        }
    }
}

/// The benchmark catalog in display order.
pub static BENCHMARKS: [BenchmarkPreset; 10] = [
    BenchmarkPreset::new("CRM / Sales Software", 12.5, 180.0, 45_000, 3.2, 32.0),
    BenchmarkPreset::new("Project Management", 8.2, 120.0, 32_000, 4.1, 28.0),
    BenchmarkPreset::new("Email Marketing", 6.8, 95.0, 28_000, 3.8, 35.0),
    BenchmarkPreset::new("E-commerce Platform", 9.4, 150.0, 55_000, 2.8, 30.0),
    BenchmarkPreset::new("Cybersecurity", 18.5, 280.0, 22_000, 2.5, 25.0),
    BenchmarkPreset::new("HR Software", 10.2, 165.0, 30_000, 3.5, 27.0),
    BenchmarkPreset::new("Marketing Automation", 11.8, 200.0, 35_000, 3.0, 33.0),
    BenchmarkPreset::new("Cloud Storage", 7.5, 110.0, 50_000, 3.6, 30.0),
    BenchmarkPreset::new("Analytics / BI", 14.0, 220.0, 25_000, 2.9, 29.0),
    BenchmarkPreset::new("Other / Custom", 10.0, 150.0, 30_000, 3.0, 30.0),
];

/// Returns every preset in display order.
pub fn all() -> &'static [BenchmarkPreset] {
    &BENCHMARKS
}

/// Returns the preset used to prefill a fresh form.
pub fn default_preset() -> &'static BenchmarkPreset {
    &BENCHMARKS[0]
}

/// Looks up a preset by its exact display name.
///
/// `None` is not an error: it means the caller is holding a custom,
/// user-supplied row and should keep the values already entered.
pub fn lookup(name: &str) -> Option<&'static BenchmarkPreset> {
    find(&BENCHMARKS, name)
}

/// Looks up a preset by exact display name in any catalog.
pub fn find<'a>(catalog: &'a [BenchmarkPreset], name: &str) -> Option<&'a BenchmarkPreset> {
    catalog.iter().find(|preset| preset.name == name)
}
