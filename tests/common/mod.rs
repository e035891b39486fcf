// Shared helpers for building throwaway git repositories
#![allow(dead_code)]

use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use std::path::Path;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Empty repository whose initial branch is `main`
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).unwrap();
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit an empty tree on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let sig = Signature::now("Test Author", "test@example.com").unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .unwrap();
    }

    /// Annotated tag on HEAD
    pub fn annotated_tag(&self, name: &str) {
        let sig = Signature::now("Test Author", "test@example.com").unwrap();
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag(name, head.as_object(), &sig, "release", false)
            .unwrap();
    }

    /// Create `branch` at HEAD and check it out
    pub fn checkout_new_branch(&self, branch: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(branch, &head, false).unwrap();
        self.repo.set_head(&format!("refs/heads/{}", branch)).unwrap();
    }

    pub fn detach_head(&self) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.set_head_detached(head.id()).unwrap();
    }
}
