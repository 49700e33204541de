//! Line Review Common Library
//!
//! CLIとWeb(WASM)で共有される型・オーバーレイ描画・ビューア状態

pub mod types;
pub mod fields;
pub mod error;
pub mod parser;
pub mod intake;
pub mod annotation;
pub mod selection;
pub mod viewport;
pub mod overlay;
pub mod debounce;
pub mod session;
pub mod summary;

pub use types::{BoundingBox, DisplayState, FieldAnnotation, FieldKind, ResultSet, NORMALIZED_EXTENT};
pub use fields::{label_for, FIELD_REGISTRY};
pub use error::{Error, Result};
pub use parser::parse_upload_response;
pub use intake::{format_file_size, validate_document};
pub use annotation::{extract_annotations, AnnotationStore};
pub use selection::SelectionSet;
pub use viewport::{PixelRect, ScalePolicy, ViewportState};
pub use overlay::{draw_overlay, plan_overlay, Color, OverlayStyle, RasterSurface, PALETTE};
pub use debounce::Debouncer;
pub use session::{DocumentToken, RenderTicket, ViewerSession};
pub use summary::{summarize, LineItemSummary, LineType};
