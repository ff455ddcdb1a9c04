//! C FFI API functions.

use crate::types::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use cutlist_core::{LogFacade, Piece, Result};
use cutlist_d2::SheetNester;

/// Error codes.
pub const CUTLIST_OK: i32 = 0;
pub const CUTLIST_ERR_NULL_PTR: i32 = -1;
pub const CUTLIST_ERR_INVALID_JSON: i32 = -2;
pub const CUTLIST_ERR_SOLVE_FAILED: i32 = -3;
pub const CUTLIST_ERR_UNKNOWN: i32 = -99;

/// Solves a layout request given as JSON.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `cutlist_free_string`
#[no_mangle]
pub unsafe extern "C" fn cutlist_solve(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    if request_json.is_null() || result_ptr.is_null() {
        return CUTLIST_ERR_NULL_PTR;
    }

    let json_str = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return CUTLIST_ERR_INVALID_JSON,
    };

    let response = solve_json(json_str);
    let response_json = match serde_json::to_string(&response) {
        Ok(s) => s,
        Err(_) => return CUTLIST_ERR_UNKNOWN,
    };

    match CString::new(response_json) {
        Ok(cstr) => {
            *result_ptr = cstr.into_raw();
            if response.success {
                CUTLIST_OK
            } else {
                CUTLIST_ERR_SOLVE_FAILED
            }
        }
        Err(_) => CUTLIST_ERR_UNKNOWN,
    }
}

/// Frees a string allocated by cutlist.
///
/// # Safety
/// - `ptr` must have been allocated by a cutlist function
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn cutlist_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Returns the library version from Cargo.toml.
///
/// The returned string is statically allocated and must not be freed.
#[no_mangle]
pub extern "C" fn cutlist_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

/// Parses, solves and converts a JSON layout request.
///
/// Never panics on bad input: parse and validation failures come back as a
/// response with `success: false`.
pub fn solve_json(json_str: &str) -> SolveResponse {
    let request: SolveRequest = match serde_json::from_str(json_str) {
        Ok(r) => r,
        Err(e) => return SolveResponse::failure(format!("Invalid JSON: {}", e)),
    };
    solve_request(&request)
}

/// Solves an already parsed request.
pub fn solve_request(request: &SolveRequest) -> SolveResponse {
    let pieces = match build_pieces(request) {
        Ok(pieces) => pieces,
        Err(e) => return SolveResponse::failure(e.to_string()),
    };

    let config = request.sheet.to_config();
    let nester = SheetNester::new(config).with_logger(LogFacade);

    match nester.solve(&pieces) {
        Ok(result) => result.into(),
        Err(e) => SolveResponse::failure(e.to_string()),
    }
}

fn build_pieces(request: &SolveRequest) -> Result<Vec<Piece>> {
    request.pieces.iter().map(PieceRequest::to_piece).collect()
}
