mod base;
mod entity;
mod interface;
mod middleware;
mod printer;
mod resolver;
mod sequential;
mod tokenizer;
mod validate;

pub use base::*;
pub use entity::OptionEntity;
pub(crate) use entity::OptionConfig;
pub(crate) use interface::*;
pub use middleware::CmdReader;
pub use printer::Printer;
pub(crate) use resolver::Resolver;
pub(crate) use sequential::distribute;
pub use tokenizer::{squash, tokenize};
pub(crate) use validate::{validate, Index};
