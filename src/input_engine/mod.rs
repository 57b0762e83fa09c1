pub mod key;
pub use self::key::{InputEvent, Key};

pub mod command;
pub use self::command::{Command, CommandOutcome, ManualControl};

pub mod bindings;
pub use self::bindings::{HeldControls, KeyBindings};

pub mod script;
pub use self::script::{parse_script, ScriptStep};
