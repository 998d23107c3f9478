//! View routing: path string <-> screen identifier.
//!
//! Both directions are pure and total. The host navigation layer owns the
//! actual URL; this module only interprets it.

use serde::{Deserialize, Serialize};

/// Canonical identifier for one dashboard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Dashboard,
    Patients,
    Appointments,
    Medications,
    Vitals,
    Team,
    Reports,
    Settings,
}

/// View used for the root path, empty input and unknown paths
pub const DEFAULT_VIEW: ViewId = ViewId::Dashboard;

/// Prefix table in matching priority order.
/// The default view is absent: it only matches by fallback.
const PREFIXES: &[(&str, ViewId)] = &[
    ("/patients", ViewId::Patients),
    ("/appointments", ViewId::Appointments),
    ("/medications", ViewId::Medications),
    ("/vitals", ViewId::Vitals),
    ("/team", ViewId::Team),
    ("/reports", ViewId::Reports),
    ("/settings", ViewId::Settings),
];

impl ViewId {
    /// Sidebar order
    pub const ALL: [ViewId; 8] = [
        ViewId::Dashboard,
        ViewId::Patients,
        ViewId::Appointments,
        ViewId::Medications,
        ViewId::Vitals,
        ViewId::Team,
        ViewId::Reports,
        ViewId::Settings,
    ];

    /// Canonical path of the view
    pub fn path(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "/",
            ViewId::Patients => "/patients",
            ViewId::Appointments => "/appointments",
            ViewId::Medications => "/medications",
            ViewId::Vitals => "/vitals",
            ViewId::Team => "/team",
            ViewId::Reports => "/reports",
            ViewId::Settings => "/settings",
        }
    }

    /// Short label for the sidebar
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Patients => "Patients",
            ViewId::Appointments => "Appointments",
            ViewId::Medications => "Medications",
            ViewId::Vitals => "Vitals",
            ViewId::Team => "Care Team",
            ViewId::Reports => "Reports",
            ViewId::Settings => "Settings",
        }
    }

    /// Page title for the header
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Patients => "Patients",
            ViewId::Appointments => "Appointments",
            ViewId::Medications => "Medications",
            ViewId::Vitals => "Vitals & Monitoring",
            ViewId::Team => "Care Team",
            ViewId::Reports => "Reports & Analytics",
            ViewId::Settings => "Settings",
        }
    }

    /// Icon name understood by the frontend `icon()` helper
    pub fn icon(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "activity",
            ViewId::Patients => "users",
            ViewId::Appointments => "calendar",
            ViewId::Medications => "pill",
            ViewId::Vitals => "heart-pulse",
            ViewId::Team => "heart-handshake",
            ViewId::Reports => "bar-chart",
            ViewId::Settings => "settings",
        }
    }
}

/// Resolve an arbitrary path to a view.
///
/// Prefixes are checked in a fixed order; the first match wins. Empty input,
/// the root path and anything unmatched resolve to [`DEFAULT_VIEW`].
pub fn resolve_view(path: &str) -> ViewId {
    if path.is_empty() || path == "/" {
        return DEFAULT_VIEW;
    }
    PREFIXES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|(_, view)| *view)
        .unwrap_or(DEFAULT_VIEW)
}

/// Canonical path for a view
pub fn path_for(view: ViewId) -> &'static str {
    view.path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_on_canonical_paths() {
        for view in ViewId::ALL {
            assert_eq!(resolve_view(path_for(view)), view, "{:?}", view);
        }
    }

    #[test]
    fn test_path_for_is_deterministic() {
        for view in ViewId::ALL {
            assert_eq!(path_for(view), path_for(view));
        }
        assert_eq!(path_for(DEFAULT_VIEW), "/");
    }

    #[test]
    fn test_unknown_and_empty_paths_fall_back() {
        assert_eq!(resolve_view(""), ViewId::Dashboard);
        assert_eq!(resolve_view("/"), ViewId::Dashboard);
        assert_eq!(resolve_view("/billing"), ViewId::Dashboard);
        assert_eq!(resolve_view("patients"), ViewId::Dashboard);
        assert_eq!(resolve_view("/Patients"), ViewId::Dashboard);
    }

    #[test]
    fn test_prefix_matching() {
        assert_eq!(resolve_view("/patients/p1"), ViewId::Patients);
        assert_eq!(resolve_view("/vitals?patient=p2"), ViewId::Vitals);
        assert_eq!(resolve_view("/settings/"), ViewId::Settings);
        // Plain prefix match, no segment boundary check
        assert_eq!(resolve_view("/teamwork"), ViewId::Team);
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = ViewId::ALL.iter().map(|v| v.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), ViewId::ALL.len());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&ViewId::Appointments).unwrap();
        assert_eq!(json, "\"appointments\"");
    }
}
