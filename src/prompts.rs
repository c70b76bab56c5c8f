//! Prompt construction for the gateway operations
//!
//! Pure string formatting: each operation has a template under `data/prompts/`
//! and a builder that interpolates the caller's arguments verbatim. The
//! "Respond ONLY with a JSON object..." instructions are the contract the
//! response normalizer depends on; change them together with the key names
//! the callers read.

pub const PROPERTY_DESCRIPTION: &str = include_str!("../data/prompts/property_description.txt");
pub const CHAT_ANSWER: &str = include_str!("../data/prompts/chat_answer.txt");
pub const SEARCH_CRITERIA: &str = include_str!("../data/prompts/search_criteria.txt");
pub const NEIGHBORHOOD_REPORT: &str = include_str!("../data/prompts/neighborhood_report.txt");
pub const IMAGE_CRITERIA: &str = include_str!("../data/prompts/image_criteria.txt");
pub const INTERIOR_DESIGN: &str = include_str!("../data/prompts/interior_design.txt");
pub const INVESTMENT_ANALYSIS: &str = include_str!("../data/prompts/investment_analysis.txt");
pub const OFFER_LETTER: &str = include_str!("../data/prompts/offer_letter.txt");
pub const DOCUMENT_SUMMARY: &str = include_str!("../data/prompts/document_summary.txt");
pub const LIFESTYLE_SCORE: &str = include_str!("../data/prompts/lifestyle_score.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Marketing-style listing description from free-text property details.
pub fn property_description(details: &str) -> String {
    render(PROPERTY_DESCRIPTION, &[("details", details)])
}

/// Concise assistant answer to a buyer/seller question.
pub fn chat_answer(question: &str) -> String {
    render(CHAT_ANSWER, &[("question", question)])
}

/// Search-criteria extraction; the reply must be a JSON object with optional
/// `location`, `minPrice` and `maxPrice` keys.
pub fn search_criteria(query: &str) -> String {
    render(SEARCH_CRITERIA, &[("query", query)])
}

/// Markdown neighborhood report for a location.
pub fn neighborhood_report(location: &str) -> String {
    render(NEIGHBORHOOD_REPORT, &[("location", location)])
}

/// Instruction part of the image-analysis request; the reply must be a JSON
/// object with `style`, `features` and `estimatedPriceRange` keys.
pub fn image_criteria() -> String {
    IMAGE_CRITERIA.to_string()
}

/// Instruction part of the room-redesign request for a target style.
pub fn interior_design(style: &str) -> String {
    render(INTERIOR_DESIGN, &[("style", style)])
}

/// Investment report; the reply must be a JSON object with `rentalYield`,
/// `cashFlow`, `appreciationForecast`, `riskAssessment` and
/// `investmentRating` keys.
pub fn investment_analysis(details: &str) -> String {
    render(INVESTMENT_ANALYSIS, &[("details", details)])
}

/// Offer letter from property details, an offer amount and buyer conditions.
pub fn offer_letter(details: &str, offer_amount: &str, conditions: &str) -> String {
    render(
        OFFER_LETTER,
        &[
            ("details", details),
            ("offer_amount", offer_amount),
            ("conditions", conditions),
        ],
    )
}

/// Instruction part of the legal-document summary request.
pub fn document_summary() -> String {
    DOCUMENT_SUMMARY.to_string()
}

/// Lifestyle scores for an amenity list; the reply must be a JSON object with
/// `familyFriendlyScore` and `youngProfessionalScore` keys.
pub fn lifestyle_score(amenities: &str) -> String {
    render(LIFESTYLE_SCORE, &[("amenities", amenities)])
}
