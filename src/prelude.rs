pub use crate::board::{
    self, Board,
    components::{Cell, Coord, Direction, MergeEvent, MoveEvent},
    snapshot::{BoardSnapshot, CellRecord},
};
pub use crate::consts::*;
pub use crate::evaluation::{self, Weights, evaluate};
pub use crate::generator::TileGenerator;
pub use crate::search::{self, SearchEngine, SearchResult};
pub use crate::utils::{self, cli::*, log::*};
pub use miette::{self, Context, IntoDiagnostic, Result};
pub use std::fmt::Display;
pub use std::str::FromStr;
pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
