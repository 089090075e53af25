//! Objective templates - the onboarding catalog
//!
//! A fixed, read-only list of habits the player can pick from. Templates
//! are NOT persisted; objectives copy what they need at creation time.

/// Icon used when a selected name is not in the catalog.
pub const DEFAULT_ICON: &str = "⭐";

/// Daily minutes used when a selected name is not in the catalog.
pub const DEFAULT_BASE_MINUTES: u32 = 30;

/// A selectable habit template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    /// Recommended minutes per day for a fresh objective
    pub base_minutes: u32,
}

impl ObjectiveTemplate {
    const fn new(name: &'static str, icon: &'static str, base_minutes: u32) -> Self {
        Self {
            name,
            icon,
            base_minutes,
        }
    }

    /// Look up a template by its exact display name
    pub fn find(name: &str) -> Option<&'static ObjectiveTemplate> {
        OBJECTIVE_TEMPLATES.iter().find(|t| t.name == name)
    }

    /// Icon for a name, falling back to [`DEFAULT_ICON`]
    pub fn icon_for(name: &str) -> &'static str {
        Self::find(name).map_or(DEFAULT_ICON, |t| t.icon)
    }

    /// Base minutes for a name, falling back to [`DEFAULT_BASE_MINUTES`]
    pub fn base_minutes_for(name: &str) -> u32 {
        Self::find(name).map_or(DEFAULT_BASE_MINUTES, |t| t.base_minutes)
    }
}

/// The onboarding catalog, in display order.
pub static OBJECTIVE_TEMPLATES: [ObjectiveTemplate; 10] = [
    ObjectiveTemplate::new("Atletismo", "🏃‍♂️", 30),
    ObjectiveTemplate::new("WorkOut", "💪", 45),
    ObjectiveTemplate::new("Estudiar", "📚", 60),
    ObjectiveTemplate::new("Trabajar", "💻", 120),
    ObjectiveTemplate::new("Tiempo de calidad", "❤️", 30),
    ObjectiveTemplate::new("Leer", "📖", 45),
    ObjectiveTemplate::new("Meditación", "🧘‍♂️", 20),
    ObjectiveTemplate::new("Idiomas", "🌍", 30),
    ObjectiveTemplate::new("Creatividad", "🎨", 60),
    ObjectiveTemplate::new("Cocinar", "👨‍🍳", 45),
];
