use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Language used for the prompt and for the labels the service reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// Sentinel reported when no category could be detected
    pub fn unknown_label(self) -> &'static str {
        match self {
            Language::Ko => "알 수 없음",
            Language::En => "unknown",
        }
    }
}

/// Season family of a personal color category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Heading used for the season group in the prompt
    pub fn heading(self, language: Language) -> &'static str {
        match (self, language) {
            (Season::Spring, Language::Ko) => "🌸 **봄 계열 (따뜻하고 밝은 색상)**",
            (Season::Summer, Language::Ko) => "🌊 **여름 계열 (차가우면서 부드러운 색상)**",
            (Season::Autumn, Language::Ko) => "🍂 **가을 계열 (따뜻하고 깊은 색상)**",
            (Season::Winter, Language::Ko) => "❄️ **겨울 계열 (차가우면서 강렬한 색상)**",
            (Season::Spring, Language::En) => "🌸 **Spring (warm and light colors)**",
            (Season::Summer, Language::En) => "🌊 **Summer (cool and soft colors)**",
            (Season::Autumn, Language::En) => "🍂 **Autumn (warm and deep colors)**",
            (Season::Winter, Language::En) => "❄️ **Winter (cool and intense colors)**",
        }
    }
}

/// The ten PCCS-based personal color categories
///
/// Declaration order is the detection priority used when scanning
/// unstructured model replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalColor {
    SpringLight,
    SpringBright,
    SummerLight,
    SummerBright,
    SummerMuted,
    AutumnMuted,
    AutumnStrong,
    AutumnDeep,
    WinterBright,
    WinterDeep,
}

impl PersonalColor {
    /// All categories in priority order
    pub const ALL: [PersonalColor; 10] = [
        PersonalColor::SpringLight,
        PersonalColor::SpringBright,
        PersonalColor::SummerLight,
        PersonalColor::SummerBright,
        PersonalColor::SummerMuted,
        PersonalColor::AutumnMuted,
        PersonalColor::AutumnStrong,
        PersonalColor::AutumnDeep,
        PersonalColor::WinterBright,
        PersonalColor::WinterDeep,
    ];

    pub fn season(self) -> Season {
        match self {
            PersonalColor::SpringLight | PersonalColor::SpringBright => Season::Spring,
            PersonalColor::SummerLight | PersonalColor::SummerBright | PersonalColor::SummerMuted => {
                Season::Summer
            }
            PersonalColor::AutumnMuted | PersonalColor::AutumnStrong | PersonalColor::AutumnDeep => {
                Season::Autumn
            }
            PersonalColor::WinterBright | PersonalColor::WinterDeep => Season::Winter,
        }
    }

    pub fn korean_label(self) -> &'static str {
        match self {
            PersonalColor::SpringLight => "봄 라이트",
            PersonalColor::SpringBright => "봄 브라이트",
            PersonalColor::SummerLight => "여름 라이트",
            PersonalColor::SummerBright => "여름 브라이트",
            PersonalColor::SummerMuted => "여름 뮤트",
            PersonalColor::AutumnMuted => "가을 뮤트",
            PersonalColor::AutumnStrong => "가을 스트롱",
            PersonalColor::AutumnDeep => "가을 딥",
            PersonalColor::WinterBright => "겨울 브라이트",
            PersonalColor::WinterDeep => "겨울 딥",
        }
    }

    pub fn english_label(self) -> &'static str {
        match self {
            PersonalColor::SpringLight => "Spring Light",
            PersonalColor::SpringBright => "Spring Bright",
            PersonalColor::SummerLight => "Summer Light",
            PersonalColor::SummerBright => "Summer Bright",
            PersonalColor::SummerMuted => "Summer Muted",
            PersonalColor::AutumnMuted => "Autumn Muted",
            PersonalColor::AutumnStrong => "Autumn Strong",
            PersonalColor::AutumnDeep => "Autumn Deep",
            PersonalColor::WinterBright => "Winter Bright",
            PersonalColor::WinterDeep => "Winter Deep",
        }
    }

    /// Canonical label in the given language
    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::Ko => self.korean_label(),
            Language::En => self.english_label(),
        }
    }

    /// Typical colors of the category, listed in the prompt
    pub fn palette_hint(self, language: Language) -> &'static str {
        match (self, language) {
            (PersonalColor::SpringLight, Language::Ko) => "연핑크, 피치, 연노랑, 연초록 등 밝고 따뜻한 파스텔",
            (PersonalColor::SpringBright, Language::Ko) => "코랄, 오렌지, 밝은 초록, 터콰이즈 등 선명하고 따뜻한 색상",
            (PersonalColor::SummerLight, Language::Ko) => "라벤더, 연파랑, 민트, 연핑크 등 부드럽고 차가운 파스텔",
            (PersonalColor::SummerBright, Language::Ko) => "로얄블루, 퍼플, 매젠타 등 선명하고 차가운 색상",
            (PersonalColor::SummerMuted, Language::Ko) => "그레이, 네이비, 스모키 블루 등 차분하고 차가운 중성색",
            (PersonalColor::AutumnMuted, Language::Ko) => "베이지, 카키, 브라운 등 차분하고 따뜻한 중성색",
            (PersonalColor::AutumnStrong, Language::Ko) => "머스타드, 올리브, 버건디 등 진하고 따뜻한 색상",
            (PersonalColor::AutumnDeep, Language::Ko) => "다크브라운, 와인, 딥그린 등 깊고 따뜻한 색상",
            (PersonalColor::WinterBright, Language::Ko) => "순백, 빨강, 파랑 등 선명하고 차가운 색상",
            (PersonalColor::WinterDeep, Language::Ko) => "블랙, 네이비, 다크퍼플 등 깊고 차가운 색상",
            (PersonalColor::SpringLight, Language::En) => "light pink, peach, pale yellow, light green; bright warm pastels",
            (PersonalColor::SpringBright, Language::En) => "coral, orange, bright green, turquoise; vivid warm colors",
            (PersonalColor::SummerLight, Language::En) => "lavender, light blue, mint, light pink; soft cool pastels",
            (PersonalColor::SummerBright, Language::En) => "royal blue, purple, magenta; vivid cool colors",
            (PersonalColor::SummerMuted, Language::En) => "gray, navy, smoky blue; calm cool neutrals",
            (PersonalColor::AutumnMuted, Language::En) => "beige, khaki, brown; calm warm neutrals",
            (PersonalColor::AutumnStrong, Language::En) => "mustard, olive, burgundy; rich warm colors",
            (PersonalColor::AutumnDeep, Language::En) => "dark brown, wine, deep green; deep warm colors",
            (PersonalColor::WinterBright, Language::En) => "pure white, red, blue; vivid cool colors",
            (PersonalColor::WinterDeep, Language::En) => "black, navy, dark purple; deep cool colors",
        }
    }

    /// Look up a category by its exact Korean or English label
    pub fn from_label(label: &str) -> Option<PersonalColor> {
        let label = label.trim();
        PersonalColor::ALL
            .into_iter()
            .find(|c| c.korean_label() == label || c.english_label() == label)
    }

    /// Whether the text mentions this category in either language
    pub fn is_mentioned_in(self, text: &str) -> bool {
        text.contains(self.korean_label()) || text.contains(self.english_label())
    }
}

/// Result of a personal color analysis
///
/// Keys the model returns beyond the four known fields are kept in `extra`
/// and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    pub dominant_colors: Vec<String>,
    pub personal_color: String,
    /// Any JSON number the model reports, kept as written
    pub confidence: Number,
    pub reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColorAnalysis {
    /// The category this result names, if it is one of the known labels
    pub fn category(&self) -> Option<PersonalColor> {
        PersonalColor::from_label(&self.personal_color)
    }

    pub fn confidence_in_range(&self) -> bool {
        self.confidence
            .as_f64()
            .is_some_and(|c| (0.0..=100.0).contains(&c))
    }
}

/// Error result returned to callers in place of an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body of a completed analysis request: either a result or a wrapped error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Analysis(ColorAnalysis),
    Failure(AnalysisFailure),
}
