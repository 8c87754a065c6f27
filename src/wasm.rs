//! WASM bindings for Pinsmith Core.
//!
//! This module provides JavaScript-friendly bindings so browser hosts
//! can compile behaviors against a project snapshot without a server
//! round trip.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSketchCompiler } from 'pinsmith_core';
//!
//! await init();
//!
//! const compiler = new WasmSketchCompiler(JSON.stringify({ projects }));
//! const code = compiler.compile(behaviorYaml, "p1");
//! ```

use wasm_bindgen::prelude::*;

use crate::project::InMemoryProjectStore;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible behavior compiler bound to one project snapshot.
///
/// The snapshot is parsed once at construction; each `compile` call
/// runs the full pipeline against it.
#[wasm_bindgen]
pub struct WasmSketchCompiler {
    store: InMemoryProjectStore,
}

#[wasm_bindgen]
impl WasmSketchCompiler {
    /// Create a compiler from a project snapshot JSON string
    /// (`{"projects": [...]}`).
    ///
    /// # Errors
    /// Throws when the snapshot is not valid JSON in the expected shape.
    #[wasm_bindgen(constructor)]
    pub fn new(projects_json: &str) -> Result<WasmSketchCompiler, JsValue> {
        let store = InMemoryProjectStore::from_json(projects_json)
            .map_err(|e| JsValue::from_str(&format!("invalid project snapshot: {e}")))?;
        Ok(WasmSketchCompiler { store })
    }

    /// Compile behavior DSL text for a project, returning sketch source.
    ///
    /// # Errors
    /// Throws a string of the form `"<kind>: <message>"` where kind is
    /// one of `schema`, `semantic`, `context`, `emission`.
    #[wasm_bindgen]
    pub fn compile(&self, behavior_dsl: &str, project_id: &str) -> Result<String, JsValue> {
        crate::compile(behavior_dsl, project_id, &self.store)
            .map(|result| result.code)
            .map_err(to_js_error)
    }

    /// Compile behavior DSL text and return the IR as a JSON string.
    ///
    /// Useful for host UIs that render the resolved pin table.
    #[wasm_bindgen]
    pub fn compile_ir(&self, behavior_dsl: &str, project_id: &str) -> Result<String, JsValue> {
        let result = crate::compile(behavior_dsl, project_id, &self.store).map_err(to_js_error)?;
        serde_json::to_string(&result.ir).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

fn to_js_error(err: crate::SketchError) -> JsValue {
    JsValue::from_str(&format!("{}: {}", err.kind().as_str(), err))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// The board catalog as a JSON string, for host board pickers.
#[wasm_bindgen]
pub fn board_catalog() -> Result<String, JsValue> {
    serde_json::to_string(crate::board::boards()).map_err(|e| JsValue::from_str(&e.to_string()))
}
