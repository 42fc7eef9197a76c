//! TargetKit Import Core — The Target Pipeline
//!
//! Turns `.target` files (per-vertex displacement offsets) into shape-key
//! data on a mesh:
//! - **Parser:** Stream a text file into displacement records
//! - **Applicator:** Accumulate scaled, axis-remapped offsets onto a
//!   shape key's vertex buffer
//! - **Orchestrator:** Drive single- or multi-file imports with
//!   collision handling, per-file rollback, and active-key selection
//!
//! The pipeline operates on any [`ShapeKeyMesh`](targetkit_mesh_model::ShapeKeyMesh)
//! implementation; all session state is passed explicitly.

pub mod apply;
pub mod parser;
pub mod scale;
pub mod session;

pub use apply::{apply_record, displacement};
pub use parser::{TargetReader, TargetRecord};
pub use scale::{ScaleFactorSource, ScaleUnit, SceneScale};
pub use session::{
    import_target, import_targets, FileOutcome, ImportReport, ImportSession, InvocationStatus,
    SkipReason,
};
