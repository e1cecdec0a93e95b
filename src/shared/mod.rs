//! Geteilte Typen für layer-übergreifende Verträge (Konfiguration).

pub mod options;

pub use options::EditorOptions;
