use crate::areas::run_log::RunLog;
use crate::areas::workspace::Workspace;
use crate::artifacts::pairs::pairing_rule::PairingRule;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Coordinates one comparison run over the sibling folders of a root.
pub struct BatchComparator {
    workspace: Workspace,
    rule: PairingRule,
    log: RefCell<RunLog>,
}

impl BatchComparator {
    pub fn new(root: &Path, rule: PairingRule, log: RunLog) -> anyhow::Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Root folder {} does not exist", root.display()))?;

        if !root.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", root);
        }

        Ok(BatchComparator {
            workspace: Workspace::new(root.into_boxed_path()),
            rule,
            log: RefCell::new(log),
        })
    }

    pub fn root(&self) -> &Path {
        self.workspace.path()
    }

    pub fn rule(&self) -> &PairingRule {
        &self.rule
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn log(&'_ self) -> RefMut<'_, RunLog> {
        self.log.borrow_mut()
    }

    pub fn into_log(self) -> RunLog {
        self.log.into_inner()
    }
}
