//! Browser bindings: the original consumer of this solver is a web page
//! that fetches the dictionary text itself and renders matches into a
//! list, so the WASM surface takes raw strings in and hands plain arrays
//! back.

use crate::log::init_logger;
use crate::solver::{self, SolveStatus, SolverError};
use crate::trie::DictionaryIndex;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E003", "S001")
    code: String,
    /// Display message
    message: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // For ParseFailure, surface the nested ParseError's code and help
        match &e {
            SolverError::ParseFailure(pe) => WasmError {
                code: pe.code().to_string(),
                message: pe.to_string(),
                help: pe.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        // Create a JavaScript Error object with the formatted message
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize rackfit logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// A dictionary index owned by the JavaScript side.
///
/// Built once from the fetched dictionary text; queries then borrow it
/// read-only, so the page never re-tokenizes the word list per search.
#[wasm_bindgen]
pub struct Dictionary {
    index: DictionaryIndex,
}

#[wasm_bindgen]
impl Dictionary {
    /// Tokenize `contents` and build the length-sharded index.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(contents: &str) -> Dictionary {
        let word_list = WordList::parse_from_str(contents);
        log::info!("building index from {} words", word_list.words.len());
        Dictionary {
            index: DictionaryIndex::build(&word_list.words),
        }
    }
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    matches: Vec<String>,
    status: String,
}

/// JS entry: (query: string, dictionary: Dictionary, num_results_requested: number)
/// returns `{ matches: string[], status: string }`
#[wasm_bindgen]
pub fn solve_pattern(
    query: &str,
    dictionary: &Dictionary,
    num_results_requested: usize,
) -> Result<JsValue, JsValue> {
    let result = solver::solve_pattern(query, &dictionary.index, num_results_requested)
        .map_err(|e| JsValue::from(WasmError::from(e)))?;

    let status = match result.status {
        SolveStatus::SearchExhausted => "exhausted",
        SolveStatus::FoundEnough => "found_enough",
        SolveStatus::TimedOut { .. } => "timed_out",
    }
    .to_string();

    to_value(&WasmSolveResult {
        matches: result.matches,
        status,
    })
    .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
}
