use crate::i18n::{Language, LanguageCode};

/// All localized user-facing strings of the experience section for a language.
///
/// Fields are addressed directly inside the crate; renderers that work with
/// the web app's camelCase keys go through [`LanguageStrings::t`].
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Section Header ====================
    /// Small eyebrow label above the heading
    pub background: &'static str,

    /// Section heading
    pub experience: &'static str,

    /// Paragraph under the heading
    pub experience_intro: &'static str,

    // ==================== Education ====================
    pub education: &'static str,
    pub degree: &'static str,

    // ==================== Tech Stack Categories ====================
    pub core_tech: &'static str,
    pub systems_logic: &'static str,
    pub data_infra: &'static str,
    pub creative_simulation: &'static str,

    // ==================== Widgets ====================
    pub now_playing: &'static str,
    pub paused: &'static str,
    pub photos: &'static str,

    // ==================== Cards ====================
    /// Marker next to the current role
    pub current: &'static str,

    /// Shown when the list loaded fine but is empty
    pub no_experiences: &'static str,
}

impl LanguageStrings {
    /// String table for a language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language.language_code() {
            LanguageCode::En => &ENGLISH_STRINGS,
            LanguageCode::Es => &SPANISH_STRINGS,
            LanguageCode::Fr => &FRENCH_STRINGS,
            LanguageCode::De => &GERMAN_STRINGS,
        }
    }

    /// Look up a UI string by its key.
    ///
    /// Unknown keys are returned unchanged so a missing translation shows up
    /// as its key instead of an empty label.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match key {
            "background" => self.background,
            "experience" => self.experience,
            "experienceIntro" => self.experience_intro,
            "education" => self.education,
            "degree" => self.degree,
            "coreTech" => self.core_tech,
            "systemsLogic" => self.systems_logic,
            "dataInfra" => self.data_infra,
            "creativeSimulation" => self.creative_simulation,
            "nowPlaying" => self.now_playing,
            "paused" => self.paused,
            "photos" => self.photos,
            "current" => self.current,
            "noExperiences" => self.no_experiences,
            _ => key,
        }
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    background: "Background",
    experience: "Experience",
    experience_intro: "Where I have worked and what I focused on along the way.",

    education: "Education",
    degree: "B.Sc. in Computer Science",

    core_tech: "Core Tech",
    systems_logic: "Systems & Logic",
    data_infra: "Data & Infra",
    creative_simulation: "Creative & Simulation",

    now_playing: "Now playing",
    paused: "Paused",
    photos: "Photos",

    current: "Current",
    no_experiences: "No experience entries yet.",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    background: "Trayectoria",
    experience: "Experiencia",
    experience_intro: "Dónde he trabajado y en qué me he enfocado.",

    education: "Educación",
    degree: "Ingeniería en Ciencias Computacionales",

    core_tech: "Tecnologías principales",
    systems_logic: "Sistemas y lógica",
    data_infra: "Datos e infraestructura",
    creative_simulation: "Creatividad y simulación",

    now_playing: "Sonando ahora",
    paused: "En pausa",
    photos: "Fotos",

    current: "Actual",
    no_experiences: "Aún no hay experiencias.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    background: "Parcours",
    experience: "Expérience",
    experience_intro: "Où j'ai travaillé et sur quoi je me suis concentré.",

    education: "Formation",
    degree: "Licence en informatique",

    core_tech: "Technologies clés",
    systems_logic: "Systèmes et logique",
    data_infra: "Données et infra",
    creative_simulation: "Création et simulation",

    now_playing: "En écoute",
    paused: "En pause",
    photos: "Photos",

    current: "Actuel",
    no_experiences: "Aucune expérience pour le moment.",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    background: "Werdegang",
    experience: "Erfahrung",
    experience_intro: "Wo ich gearbeitet habe und worauf ich mich konzentriert habe.",

    education: "Ausbildung",
    degree: "B.Sc. Informatik",

    core_tech: "Kerntechnologien",
    systems_logic: "Systeme & Logik",
    data_infra: "Daten & Infrastruktur",
    creative_simulation: "Kreativ & Simulation",

    now_playing: "Läuft gerade",
    paused: "Pausiert",
    photos: "Fotos",

    current: "Aktuell",
    no_experiences: "Noch keine Einträge.",
};
