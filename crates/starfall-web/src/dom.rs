//! Browser elements a game draws into and reports through.
//!
//! The canvas is required. The score and game-over elements are optional so
//! a page can omit either one.

use starfall_engine::HudCommand;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCanvasElement, HtmlElement};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongType { id: String, expected: &'static str },
    #[error("style update failed: {0}")]
    Style(String),
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Canvas plus the HUD elements, looked up once at attach time.
pub struct DomSurface {
    canvas: HtmlCanvasElement,
    score: Option<Element>,
    game_over: Option<HtmlElement>,
}

impl DomSurface {
    /// Look up the elements by id. Empty ids for the HUD elements mean "none".
    pub fn bind(canvas_id: &str, score_id: &str, game_over_id: &str) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| DomError::MissingElement(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DomError::WrongType {
                id: canvas_id.to_string(),
                expected: "canvas",
            })?;

        let score = optional_id(score_id)
            .map(|id| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| DomError::MissingElement(id.to_string()))
            })
            .transpose()?;

        let game_over = optional_id(game_over_id)
            .map(|id| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| DomError::MissingElement(id.to_string()))?
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| DomError::WrongType {
                        id: id.to_string(),
                        expected: "HTML element",
                    })
            })
            .transpose()?;

        Ok(Self { canvas, score, game_over })
    }

    /// Displayed size in CSS pixels and the device pixel ratio.
    pub fn client_size(&self) -> (f32, f32, f32) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        (
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
            dpr as f32,
        )
    }

    pub fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    pub fn set_backing_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Client coordinates relative to the canvas's top-left corner.
    pub fn to_canvas(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        let rect = self.canvas.get_bounding_client_rect();
        (client_x - rect.left() as f32, client_y - rect.top() as f32)
    }

    pub fn apply(&self, command: &HudCommand) -> Result<(), DomError> {
        match command {
            HudCommand::SetScoreText(text) => {
                if let Some(score) = &self.score {
                    score.set_text_content(Some(text));
                }
                Ok(())
            }
            HudCommand::RevealGameOver => match &self.game_over {
                Some(el) => el
                    .style()
                    .set_property("visibility", "visible")
                    .map_err(|e| DomError::Style(format!("{e:?}"))),
                None => Ok(()),
            },
        }
    }
}

fn optional_id(id: &str) -> Option<&str> {
    let id = id.trim();
    (!id.is_empty()).then_some(id)
}
