// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Application name, used for config paths and the command name.
pub const APP_NAME: &str = "termcal";

/// Product identifier written into every generated calendar.
pub const PROD_ID: &str = "-//termcal//termcal//EN";

/// Knobs for a conversion run.
///
/// Every field has a default, so a config file only needs the values
/// it wants to change.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Display name clients show for the calendar.
    #[serde(alias = "name")]
    pub calendar_name: String,

    /// Timezone hint advertised to clients. Informational only; the
    /// generated times stay floating.
    pub timezone: String,

    /// Event title pattern. `{Course}`, `{Component}` and `{Section}`
    /// are replaced with the mapped column text per row.
    pub title_template: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            calendar_name: "Workday Schedule".to_owned(),
            timezone: "America/Vancouver".to_owned(),
            title_template: "{Course} {Component} {Section}".to_owned(),
        }
    }
}
