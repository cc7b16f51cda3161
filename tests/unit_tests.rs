// Unit tests for the result extractor

use personal_color_relay::core::{
    detect_personal_color, ExtractionPath, ResultExtractor, FALLBACK_COLORS, FALLBACK_CONFIDENCE,
};
use personal_color_relay::models::{ColorAnalysis, Language, PersonalColor};
use serde_json::json;

fn korean() -> ResultExtractor {
    ResultExtractor::new(Language::Ko, false)
}

fn english() -> ResultExtractor {
    ResultExtractor::new(Language::En, false)
}

fn assert_fallback_shape(analysis: &ColorAnalysis) {
    assert_eq!(analysis.dominant_colors, FALLBACK_COLORS.to_vec());
    assert_eq!(analysis.confidence.as_i64(), Some(FALLBACK_CONFIDENCE));
    assert!(analysis.extra.is_empty());
}

#[test]
fn test_structured_reply_is_returned_unchanged() {
    let reply = json!({
        "dominant_colors": ["#F4C2C2", "#FFE5B4", "#FFFACD"],
        "personal_color": "봄 라이트",
        "confidence": 85,
        "reason": "연핑크와 피치 톤의 파스텔 니트"
    });

    let analysis = korean().extract(&reply.to_string());

    assert_eq!(serde_json::to_value(&analysis).unwrap(), reply);
}

#[test]
fn test_structured_reply_keeps_extra_fields() {
    let reply = json!({
        "dominant_colors": ["#000000"],
        "personal_color": "겨울 딥",
        "confidence": 92,
        "reason": "블랙 코트",
        "secondary_color": "겨울 브라이트",
        "notes": ["matte", "wool"]
    });

    let analysis = korean().extract(&reply.to_string());

    assert_eq!(analysis.extra.get("secondary_color"), Some(&json!("겨울 브라이트")));
    assert_eq!(serde_json::to_value(&analysis).unwrap(), reply);
}

#[test]
fn test_structured_reply_keeps_float_confidence() {
    for confidence in [json!(85.0), json!(0.85)] {
        let reply = json!({
            "dominant_colors": ["#800020", "#556B2F", "#FFDB58"],
            "personal_color": "가을 스트롱",
            "confidence": confidence,
            "reason": "버건디와 올리브"
        });

        let (analysis, path) = korean().extract_with_path(&reply.to_string());

        assert_eq!(path, ExtractionPath::Structured);
        assert_eq!(analysis.dominant_colors, vec!["#800020", "#556B2F", "#FFDB58"]);
        assert_eq!(serde_json::to_value(&analysis).unwrap(), reply);
    }
}

#[test]
fn test_structured_reply_is_not_rewritten_to_configured_language() {
    let reply = r##"{"dominant_colors": ["#556B2F"], "personal_color": "Autumn Strong", "confidence": 70, "reason": "olive"}"##;
    assert_eq!(korean().extract(reply).personal_color, "Autumn Strong");
}

#[test]
fn test_single_label_in_text() {
    for color in PersonalColor::ALL {
        let text = format!("이 상품은 {} 톤에 가깝습니다.", color.korean_label());
        let analysis = korean().extract(&text);

        assert_eq!(analysis.personal_color, color.korean_label());
        assert_fallback_shape(&analysis);
    }
}

#[test]
fn test_single_english_label_in_text() {
    let analysis = english().extract("The palette reads as Summer Muted overall.");
    assert_eq!(analysis.personal_color, "Summer Muted");
    assert_eq!(analysis.reason, "Result extracted from unstructured text");
    assert_fallback_shape(&analysis);
}

#[test]
fn test_no_label_yields_unknown() {
    let ko = korean().extract("분류하기 어려운 이미지입니다.");
    assert_eq!(ko.personal_color, "알 수 없음");
    assert_eq!(ko.reason, "텍스트에서 추출된 분석 결과");
    assert_fallback_shape(&ko);

    let en = english().extract("I cannot see the garment clearly.");
    assert_eq!(en.personal_color, "unknown");
}

#[test]
fn test_empty_reply_yields_unknown() {
    assert_eq!(korean().extract("").personal_color, "알 수 없음");
}

#[test]
fn test_priority_order_beats_text_position() {
    let analysis = english().extract("Mostly Winter Deep, with hints of Spring Light.");
    assert_eq!(analysis.personal_color, "Spring Light");

    let analysis = korean().extract("겨울 딥 느낌도 있지만 가을 뮤트가 더 맞습니다");
    assert_eq!(analysis.personal_color, "가을 뮤트");
}

#[test]
fn test_priority_across_languages() {
    assert_eq!(
        detect_personal_color("Winter Bright 또는 여름 라이트"),
        Some(PersonalColor::SummerLight)
    );
}

#[test]
fn test_partial_season_name_does_not_match() {
    assert_eq!(detect_personal_color("Winter colors, very deep"), None);
    assert_eq!(detect_personal_color("가을 느낌"), None);
}

#[test]
fn test_malformed_json_falls_back_to_scan() {
    let reply = r##"{"dominant_colors": ["#800020"], "personal_color": "가을 스트롱", "confidence": 88,"##;
    let analysis = korean().extract(reply);
    assert_eq!(analysis.personal_color, "가을 스트롱");
    assert_fallback_shape(&analysis);
}

#[test]
fn test_wrong_field_types_fall_back_to_scan() {
    let reply = r##"{"dominant_colors": "#FF0000", "personal_color": "Winter Bright", "confidence": "high", "reason": "red"}"##;
    let analysis = english().extract(reply);
    assert_eq!(analysis.personal_color, "Winter Bright");
    assert_eq!(analysis.confidence.as_i64(), Some(FALLBACK_CONFIDENCE));
}
