//! Denormalized record folding.
//!
//! Turns a flat record, as produced by a join or an export, into one nested
//! document. Dotted keys are expanded and merged; list fields holding
//! sub-records are folded element by element according to the configured
//! [`ListFoldMode`].
//!
//! Every piece is merged into a single accumulator in place, so a record with
//! many dotted keys folds in time proportional to its size.

use super::{ListFoldMode, TransformError, Transformer, expand, trail::Trail};
use crate::{
    diagnostics::DropReason,
    doc::{Doc, Value},
};

impl Transformer {
    /// Folds a flat record into a nested document.
    ///
    /// - a non-list value under a plain key is copied as-is
    /// - a non-list value under a dotted key is expanded and merged in
    /// - a list value is folded according to [`ListFoldMode`]
    ///
    /// ```
    /// use docshape::{Options, Transformer, doc::Doc};
    ///
    /// let transformer = Transformer::new(Options::default());
    /// let flat = Doc::new()
    ///     .with("title", "Foundation")
    ///     .with("author.first", "Isaac")
    ///     .with("author.last", "Asimov");
    ///
    /// assert_eq!(
    ///     transformer.fold(&flat)?,
    ///     Doc::new()
    ///         .with("title", "Foundation")
    ///         .with("author", Doc::new().with("first", "Isaac").with("last", "Asimov"))
    /// );
    /// # Ok::<(), docshape::Error>(())
    /// ```
    pub fn fold(&self, flat: &Doc) -> crate::Result<Doc> {
        let root = Trail::root(self.options.max_depth);
        Ok(self.fold_at(flat, &root)?)
    }

    fn fold_at(&self, flat: &Doc, trail: &Trail<'_>) -> Result<Doc, TransformError> {
        if flat.is_empty() {
            return Ok(flat.clone());
        }

        let mut acc = Doc::with_capacity(flat.len());
        for (key, value) in flat.iter() {
            let here = trail.child(key)?;
            match value {
                Value::List(items) => match self.options.list_fold_mode {
                    ListFoldMode::MergeElements => {
                        self.fold_list_merged(&mut acc, key, items, trail, &here)?
                    }
                    ListFoldMode::Legacy => {
                        self.fold_list_legacy(&mut acc, key, items, trail, &here)?
                    }
                },
                _ if key.contains('.') => match expand(key, value.clone()) {
                    Some(expanded) => {
                        for (top, nested) in expanded {
                            self.merge_into(&mut acc, &top, nested, trail)?;
                        }
                    }
                    // Nothing but dots: there is no path to expand into.
                    None => {
                        acc.insert(key, value.clone());
                    }
                },
                _ => {
                    acc.insert(key, value.clone());
                }
            }
        }

        Ok(acc)
    }

    /// An element-less or all-scalar list is merged in unchanged. Otherwise
    /// the document elements collapse into one, and the field always becomes
    /// a one-element list holding it, even when that document is empty.
    fn fold_list_merged(
        &self,
        acc: &mut Doc,
        key: &str,
        items: &[Value],
        trail: &Trail<'_>,
        here: &Trail<'_>,
    ) -> Result<(), TransformError> {
        let records: Vec<&Doc> = items.iter().filter_map(Value::as_doc).collect();
        if records.is_empty() {
            return self.merge_into(acc, key, Value::List(items.to_vec()), trail);
        }
        self.report_skipped(items, here);

        let folded = records
            .into_iter()
            .map(|record| self.fold_at(record, here))
            .collect::<Result<Vec<_>, _>>()?;
        let folded_refs: Vec<&Doc> = folded.iter().collect();
        let combined = self.union_all_at(&folded_refs, here)?;
        self.merge_into(acc, key, Value::List(vec![Value::Doc(combined)]), trail)
    }

    fn fold_list_legacy(
        &self,
        acc: &mut Doc,
        key: &str,
        items: &[Value],
        trail: &Trail<'_>,
        here: &Trail<'_>,
    ) -> Result<(), TransformError> {
        if items.is_empty() {
            self.merge_into(acc, key, Value::List(Vec::new()), trail)?;
        }
        self.report_skipped(items, here);

        // Each element is merged against the whole accumulator, not against
        // the previous elements; only the last result survives.
        let mut inner = Doc::new();
        for record in items.iter().filter_map(Value::as_doc) {
            let folded = self.fold_at(record, here)?;
            inner = self.union_at(acc, &folded, trail)?.into_owned();
        }

        if inner.is_empty() {
            return Ok(());
        }
        self.merge_into(acc, key, Value::List(vec![Value::Doc(inner)]), trail)
    }

    fn report_skipped(&self, items: &[Value], here: &Trail<'_>) {
        for (index, item) in items.iter().enumerate() {
            if !item.is_doc() {
                self.diagnostics.field_dropped(
                    &here.render(),
                    &DropReason::NonDocumentElement {
                        index,
                        type_name: item.type_name(),
                    },
                );
            }
        }
    }
}
