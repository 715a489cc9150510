pub mod entities;
pub mod official;
