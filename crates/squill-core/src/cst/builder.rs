//! Green tree builder wrapper

use rowan::{GreenNode, GreenNodeBuilder, Language};

use super::language::SqlLanguage;
use super::nodes::SqlSyntaxNode;
use super::syntax_kind::SqlSyntaxKind;

/// Checkpoint into a partially built tree, used to wrap already-emitted
/// children into a new node (left recursion in the expression parser).
pub type Checkpoint = rowan::Checkpoint;

/// Thin typed wrapper around [`GreenNodeBuilder`]
#[derive(Debug, Default)]
pub struct CstBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl CstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: SqlSyntaxKind) {
        self.inner.start_node(SqlLanguage::kind_to_raw(kind));
    }

    pub fn finish_node(&mut self) {
        self.inner.finish_node();
    }

    pub fn checkpoint(&self) -> Checkpoint {
        self.inner.checkpoint()
    }

    /// Wrap everything emitted since `checkpoint` into a new `kind` node
    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SqlSyntaxKind) {
        self.inner
            .start_node_at(checkpoint, SqlLanguage::kind_to_raw(kind));
    }

    pub fn token(&mut self, kind: SqlSyntaxKind, text: &str) {
        self.inner.token(SqlLanguage::kind_to_raw(kind), text);
    }

    pub fn finish_green(self) -> GreenNode {
        self.inner.finish()
    }

    pub fn finish(self) -> SqlSyntaxNode {
        SqlSyntaxNode::new_root(self.inner.finish())
    }
}
