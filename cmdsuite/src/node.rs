//! Named execution targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NodeEntry;

/// Kind of execution target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The machine running the suite.
    #[default]
    Local,
    /// A remote host reached over SSH.
    Ssh,
    /// A container started from an image.
    Docker,
}

impl NodeKind {
    /// The document spelling of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Ssh => "ssh",
            Self::Docker => "docker",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An execution target a test may run on.
///
/// Which fields matter depends on [`Node::kind`]; combinations that make no
/// sense for a kind (an image on an SSH node, say) are carried through
/// unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    /// Registry key the node was declared under.
    pub name: String,
    /// Target kind.
    pub kind: NodeKind,
    /// Login user.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Host address.
    pub address: String,
    /// Container image.
    pub image: String,
    /// Path to an SSH private key.
    pub identity_file: String,
}

impl Node {
    /// Build a node from its authored entry and registry key.
    #[must_use]
    pub fn from_entry(name: impl Into<String>, entry: NodeEntry) -> Self {
        Self {
            name: name.into(),
            kind: entry.kind,
            user: entry.user,
            password: entry.pass,
            address: entry.addr,
            image: entry.image,
            identity_file: entry.identity_file,
        }
    }

    /// Render the authored entry; the name becomes the registry key.
    #[must_use]
    pub fn to_entry(&self) -> NodeEntry {
        NodeEntry {
            kind: self.kind,
            user: self.user.clone(),
            pass: self.password.clone(),
            addr: self.address.clone(),
            image: self.image.clone(),
            identity_file: self.identity_file.clone(),
        }
    }
}
