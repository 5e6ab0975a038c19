use tcpu::Word;

/// Associates an emitted word's base address with the trimmed source line it
/// came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceMapItem {
    pub address: Word,
    /// Index into the trimmed source lines.
    pub line: usize,
}

pub type SourceMap = Vec<SourceMapItem>;
