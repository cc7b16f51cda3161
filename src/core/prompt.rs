use crate::models::{Language, PersonalColor, Season};
use std::fmt::Write;

/// Build the instructional prompt sent alongside the product image
///
/// The taxonomy section is generated from [`PersonalColor`], grouped by
/// season, so the labels the model is asked to use are exactly the labels the
/// extractor recognizes.
pub fn build_prompt(language: Language) -> String {
    let mut prompt = String::with_capacity(2048);

    let (intro, taxonomy_title, reply_title) = match language {
        Language::Ko => (
            "이 패션 상품 이미지를 분석하여 퍼스널 컬러 분류를 해주세요.",
            "**PCCS 색채계 기반 퍼스널 컬러 분류:**",
            "**JSON 형식으로 응답해주세요:**",
        ),
        Language::En => (
            "Analyze this fashion product image and classify its personal color.",
            "**Personal color categories based on the PCCS color system:**",
            "**Reply in JSON format:**",
        ),
    };

    prompt.push_str(intro);
    prompt.push_str("\n\n");
    prompt.push_str(taxonomy_title);
    prompt.push('\n');

    for season in Season::ALL {
        prompt.push('\n');
        prompt.push_str(season.heading(language));
        prompt.push('\n');
        for color in PersonalColor::ALL.iter().filter(|c| c.season() == season) {
            // Writing to a String cannot fail
            let _ = writeln!(prompt, "- {}: {}", color.label(language), color.palette_hint(language));
        }
    }

    prompt.push('\n');
    prompt.push_str(reply_title);
    prompt.push('\n');
    prompt.push_str(reply_template(language));

    prompt
}

fn reply_template(language: Language) -> &'static str {
    match language {
        Language::Ko => concat!(
            "{\n",
            "    \"dominant_colors\": [\"#색상1\", \"#색상2\", \"#색상3\"],\n",
            "    \"personal_color\": \"분류명\",\n",
            "    \"confidence\": 85,\n",
            "    \"reason\": \"색상 분석 근거\"\n",
            "}\n",
        ),
        Language::En => concat!(
            "{\n",
            "    \"dominant_colors\": [\"#color1\", \"#color2\", \"#color3\"],\n",
            "    \"personal_color\": \"category name\",\n",
            "    \"confidence\": 85,\n",
            "    \"reason\": \"basis for the color analysis\"\n",
            "}\n",
        ),
    }
}
