//! Per-request wrapper around a query builder.

use crate::{error::FilterError, filter::options::AssociationMapping};
use query_builder::{QueryBuilder, ast::common::OrderDir};
use tracing::trace;

/// Owns the query builder filters mutate while a datagrid query is built.
pub struct ProxyQuery {
    query_builder: Box<dyn QueryBuilder>,
    sort_by: Option<String>,
    sort_order: Option<OrderDir>,
    sort_applied: bool,
    unique_parameter_id: usize,
    entity_join_aliases: Vec<String>,
}

impl ProxyQuery {
    pub fn new(query_builder: impl QueryBuilder + 'static) -> Self {
        Self::from_boxed(Box::new(query_builder))
    }

    pub fn from_boxed(query_builder: Box<dyn QueryBuilder>) -> Self {
        Self {
            query_builder,
            sort_by: None,
            sort_order: None,
            sort_applied: false,
            unique_parameter_id: 0,
            entity_join_aliases: Vec::new(),
        }
    }

    pub fn query_builder(&self) -> &dyn QueryBuilder {
        &*self.query_builder
    }

    pub fn query_builder_mut(&mut self) -> &mut dyn QueryBuilder {
        &mut *self.query_builder
    }

    pub fn root_alias(&self) -> Result<String, FilterError> {
        self.query_builder
            .root_aliases()
            .into_iter()
            .next()
            .ok_or(FilterError::MissingRootAlias)
    }

    /// Left-joins along `mappings` starting at the root alias and returns the
    /// alias of the last entity reached.
    ///
    /// New aliases are named `s_<field>` and accumulate per hop
    /// (`s_author`, `s_author_address`). A join already present on the
    /// builder for the same association is reused, and an alias is never
    /// joined twice.
    pub fn entity_join(&mut self, mappings: &[AssociationMapping]) -> Result<String, FilterError> {
        let mut alias = self.root_alias()?;
        let mut new_alias = String::from("s");

        for mapping in mappings {
            let path = format!("{alias}.{}", mapping.field_name);

            let existing = self
                .query_builder
                .joins()
                .iter()
                .find(|join| join.join == path)
                .map(|join| join.alias.clone());
            if let Some(existing) = existing {
                trace!(join = %path, alias = %existing, "Reusing existing join");
                self.entity_join_aliases.push(existing.clone());
                alias = existing;
                continue;
            }

            new_alias.push('_');
            new_alias.push_str(&mapping.field_name);
            if !self.entity_join_aliases.contains(&new_alias) {
                trace!(join = %path, alias = %new_alias, "Joining association");
                self.entity_join_aliases.push(new_alias.clone());
                self.query_builder.left_join(&path, &new_alias);
            }
            alias = new_alias.clone();
        }

        Ok(alias)
    }

    pub fn entity_join_aliases(&self) -> &[String] {
        &self.entity_join_aliases
    }

    /// Returns a fresh id for building collision-free parameter names.
    pub fn unique_parameter_id(&mut self) -> usize {
        let id = self.unique_parameter_id;
        self.unique_parameter_id += 1;
        id
    }

    /// Sorts on `field` of the entity reached through `mappings`.
    pub fn set_sort_by(
        &mut self,
        mappings: &[AssociationMapping],
        field: &str,
    ) -> Result<(), FilterError> {
        let alias = self.entity_join(mappings)?;
        self.sort_by = Some(format!("{alias}.{field}"));
        self.sort_applied = false;
        Ok(())
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn set_sort_order(&mut self, order: OrderDir) {
        self.sort_order = Some(order);
    }

    pub fn sort_order(&self) -> Option<OrderDir> {
        self.sort_order
    }

    pub fn set_first_result(&mut self, first_result: Option<usize>) {
        self.query_builder.set_first_result(first_result);
    }

    pub fn first_result(&self) -> Option<usize> {
        self.query_builder.first_result()
    }

    pub fn set_max_results(&mut self, max_results: Option<usize>) {
        self.query_builder.set_max_results(max_results);
    }

    pub fn max_results(&self) -> Option<usize> {
        self.query_builder.max_results()
    }

    /// Applies the pending sort to the builder and returns the final DQL.
    pub fn build_dql(&mut self) -> String {
        if !self.sort_applied {
            if let Some(sort_by) = &self.sort_by {
                self.query_builder.add_order_by(sort_by, self.sort_order);
                self.sort_applied = true;
            }
        }
        self.query_builder.dql()
    }
}

impl std::fmt::Debug for ProxyQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyQuery")
            .field("dql", &self.query_builder.dql())
            .field("sort_by", &self.sort_by)
            .field("sort_order", &self.sort_order)
            .field("unique_parameter_id", &self.unique_parameter_id)
            .finish()
    }
}
