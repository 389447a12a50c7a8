use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Certificate,
    PrivateKey,
    ClientCas,
    CidrAllowlist,
}

impl MaterialKind {
    /// Secret material must only be readable by the service user.
    pub fn is_secret(self) -> bool {
        matches!(self, MaterialKind::PrivateKey)
    }
}

/// A file a collaborator has to write before pcap-api starts.
#[derive(Clone, PartialEq, Eq)]
pub struct MaterialFile {
    pub kind: MaterialKind,
    pub path: PathBuf,
    pub contents: String,
}

impl fmt::Debug for MaterialFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialFile")
            .field("kind", &self.kind)
            .field("path", &self.path)
            .field("bytes", &self.contents.len())
            .finish()
    }
}

/// Everything that must land on disk next to the resolved document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialPlan {
    files: Vec<MaterialFile>,
}

impl MaterialPlan {
    pub(crate) fn push(&mut self, kind: MaterialKind, path: PathBuf, contents: String) {
        self.files.push(MaterialFile {
            kind,
            path,
            contents,
        });
    }

    pub fn files(&self) -> &[MaterialFile] {
        &self.files
    }

    pub fn get(&self, kind: MaterialKind) -> Option<&MaterialFile> {
        self.files.iter().find(|f| f.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
