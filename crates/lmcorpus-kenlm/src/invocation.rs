//! # Tool Invocations

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// The stages of a model build, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ToolStage {
    /// ARPA estimation with `lmplz`.
    Estimate,

    /// Vocabulary filtering with `filter`.
    Filter,

    /// Quantized trie construction with `build_binary`.
    Binarize,
}

impl ToolStage {
    /// The `KenLM` binary which runs this stage.
    pub fn binary_name(self) -> &'static str {
        match self {
            Self::Estimate => "lmplz",
            Self::Filter => "filter",
            Self::Binarize => "build_binary",
        }
    }

    /// The path of the stage binary under a `KenLM` bin directory.
    pub fn program_in<P: AsRef<Path>>(
        self,
        bin_dir: P,
    ) -> PathBuf {
        bin_dir.as_ref().join(self.binary_name())
    }
}

/// A fully constructed stage command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// The stage.
    pub stage: ToolStage,

    /// The binary to run.
    pub program: PathBuf,

    /// The arguments, without the program.
    pub args: Vec<OsString>,

    /// Bytes piped to the process's stdin, if any.
    pub stdin: Option<Vec<u8>>,
}

impl ToolInvocation {
    /// Create an invocation with no arguments.
    pub fn new<P: Into<PathBuf>>(
        stage: ToolStage,
        program: P,
    ) -> Self {
        Self {
            stage,
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Append one argument.
    pub fn arg<S: Into<OsString>>(
        mut self,
        arg: S,
    ) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append arguments.
    pub fn args<I>(
        mut self,
        args: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the bytes piped to stdin.
    pub fn with_stdin(
        self,
        stdin: Vec<u8>,
    ) -> Self {
        Self {
            stdin: Some(stdin),
            ..self
        }
    }

    /// The arguments, lossily converted for display and comparison.
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_stages() {
        let stages: Vec<ToolStage> = ToolStage::iter().collect();
        assert_eq!(
            stages,
            vec![ToolStage::Estimate, ToolStage::Filter, ToolStage::Binarize]
        );

        assert_eq!(ToolStage::Filter.to_string(), "filter");
        assert_eq!(ToolStage::Binarize.binary_name(), "build_binary");
        assert_eq!(
            ToolStage::Estimate.program_in("/opt/kenlm/bin"),
            PathBuf::from("/opt/kenlm/bin/lmplz")
        );
    }

    #[test]
    fn test_invocation_builder() {
        let inv = ToolInvocation::new(ToolStage::Filter, "/bin/filter")
            .arg("single")
            .args(["a", "b"])
            .with_stdin(b"vocab".to_vec());

        assert_eq!(inv.program, PathBuf::from("/bin/filter"));
        assert_eq!(inv.arg_strings(), vec!["single", "a", "b"]);
        assert_eq!(inv.stdin.as_deref(), Some(b"vocab".as_slice()));
    }
}
