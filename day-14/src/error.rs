use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RobotError {
    #[error("No robots in the input")]
    #[diagnostic(code(day14::empty_input))]
    EmptyInput,

    #[error("Failed to parse robot on line {line}")]
    #[diagnostic(
        code(day14::parse_error),
        help("Each line must look like `p=X,Y v=DX,DY`")
    )]
    Parse {
        #[source_code]
        src: String,
        #[label("parse error occurred here")]
        span: SourceSpan,
        line: u32,
    },

    #[error("Robot on line {line} starts at ({x}, {y}), outside the {width}x{height} lobby")]
    #[diagnostic(code(day14::outside_lobby))]
    OutsideLobby {
        line: usize,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("Lobby dimensions must be positive, got {width}x{height}")]
    #[diagnostic(code(day14::invalid_lobby))]
    InvalidLobby { width: i32, height: i32 },
}
