//! WebAssembly bindings for the RSB dashboard
//!
//! Every binding takes and returns JSON strings so the frontend can hand over
//! the session objects it already holds:
//! - Transcription and alignment of single words
//! - Per-participant analysis, aggregation, comparison and cohort summary
//! - French explanations of the report metrics

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use rsb_phonetics::{
    compare_phonetic_analysis, create_aggregate_phonetic_analysis, normalize_word,
    phonetic_explanation, summarize_cohort, Phoneme, PhoneticAnalysisResult, PhoneticAnalyzer,
    PhoneticError, RsbData, Transcriber, WordTest,
};

#[derive(Error, Debug)]
pub enum WasmError {
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("JSON serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] PhoneticError),
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// Initialize panic hook and route `log` records to the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn parse<'a, T: serde::Deserialize<'a>>(json: &'a str) -> Result<T, WasmError> {
    serde_json::from_str(json).map_err(WasmError::Parse)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, WasmError> {
    serde_json::to_string(value).map_err(WasmError::Serialize)
}

// ============================================================================
// SECTION 1: Words
// ============================================================================

#[derive(Debug, Serialize)]
struct Transcription<'a> {
    word: &'a str,
    normalized: String,
    phonemes: Vec<Phoneme>,
}

fn transcribe_word_json(word: &str) -> Result<String, WasmError> {
    to_json(&Transcription {
        word,
        normalized: normalize_word(word),
        phonemes: Transcriber::french().transcribe(word),
    })
}

fn align_words_json(target: &str, response: &str, rsb: f64) -> Result<String, WasmError> {
    let detail = PhoneticAnalyzer::default().analyze_word_detail(&WordTest::new(target, response, rsb));
    to_json(&detail)
}

/// Transcribe one word
///
/// # Returns
/// `{ "word", "normalized", "phonemes": [IPA symbols] }`
#[wasm_bindgen]
pub fn transcribe_word(word: &str) -> Result<String, JsValue> {
    Ok(transcribe_word_json(word)?)
}

/// Align a target word with a response
///
/// # Returns
/// JSON word analysis: phonemes of both words, alignment steps, distance,
/// phonetic accuracy and the phoneme errors
#[wasm_bindgen]
pub fn align_words(target: &str, response: &str, rsb: f64) -> Result<String, JsValue> {
    Ok(align_words_json(target, response, rsb)?)
}

// ============================================================================
// SECTION 2: Participants and cohorts
// ============================================================================

fn analyze_person_json(session_json: &str) -> Result<String, WasmError> {
    let session: RsbData = parse(session_json)?;
    to_json(&PhoneticAnalyzer::default().analyze_person(&session))
}

fn aggregate_analyses_json(analyses_json: &str) -> Result<String, WasmError> {
    let analyses: Vec<PhoneticAnalysisResult> = parse(analyses_json)?;
    to_json(&create_aggregate_phonetic_analysis(&analyses)?)
}

fn compare_analyses_json(first_json: &str, second_json: &str) -> Result<String, WasmError> {
    let first: PhoneticAnalysisResult = parse(first_json)?;
    let second: PhoneticAnalysisResult = parse(second_json)?;
    to_json(&compare_phonetic_analysis(&first, &second))
}

fn summarize_analyses_json(analyses_json: &str) -> Result<String, WasmError> {
    let analyses: Vec<PhoneticAnalysisResult> = parse(analyses_json)?;
    // null for an empty cohort
    to_json(&summarize_cohort(&analyses))
}

/// Analyze one participant session (`RsbData` JSON)
#[wasm_bindgen]
pub fn analyze_person(session_json: &str) -> Result<String, JsValue> {
    Ok(analyze_person_json(session_json)?)
}

/// Pool a JSON array of participant analyses
///
/// Fails on an empty array.
#[wasm_bindgen]
pub fn aggregate_analyses(analyses_json: &str) -> Result<String, JsValue> {
    Ok(aggregate_analyses_json(analyses_json)?)
}

/// Compare two participant analyses
#[wasm_bindgen]
pub fn compare_analyses(first_json: &str, second_json: &str) -> Result<String, JsValue> {
    Ok(compare_analyses_json(first_json, second_json)?)
}

/// Cohort statistics over a JSON array of participant analyses
#[wasm_bindgen]
pub fn summarize_analyses(analyses_json: &str) -> Result<String, JsValue> {
    Ok(summarize_analyses_json(analyses_json)?)
}

// ============================================================================
// SECTION 3: Explanations
// ============================================================================

fn explain_metric_json(key: &str) -> Result<String, WasmError> {
    to_json(&phonetic_explanation(key))
}

/// `{ "title", "explanation" }` for a metric key
#[wasm_bindgen]
pub fn explain_metric(key: &str) -> Result<String, JsValue> {
    Ok(explain_metric_json(key)?)
}
