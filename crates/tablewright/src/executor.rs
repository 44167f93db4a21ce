use tablewright_core::{
    schema::{is_temporal_type, ColumnDefault, ColumnSet, IndexMembership, PartitionDescriptor},
    Error, Result, RevertExecutionError, Store, StoreExecutionError,
};
use tablewright_sql::{
    diff, extract_partitions, reorder, stmt::ChangeColumn, CollationGuard, Serializer, Statement,
};

use tracing::{debug, warn};

/// The complete desired state of one column mutation.
///
/// Passed explicitly and held immutable for the duration of the request;
/// the engine reads no ambient or process-wide state.
#[derive(Debug, Clone)]
pub struct MutationRequest {
    /// The table to mutate.
    pub table: String,

    /// Desired columns in desired physical order, matched to existing
    /// columns by their `orig_name`.
    pub desired: ColumnSet,

    /// Current index membership of the table's columns.
    pub indexes: IndexMembership,

    pub options: ExecuteOptions,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Plan and render statements without executing anything.
    pub preview_only: bool,

    /// Annotate the combined statement with the online algorithm /
    /// lock-mode hint.
    pub online_hint: bool,
}

/// What a mutation operation executed, or would execute in preview.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    /// Every statement in execution order: intermediate pre-steps first,
    /// then the combined statement.
    pub statements: Vec<String>,

    /// False when the request was preview-only.
    pub executed: bool,
}

/// Drives mutation requests against a store.
///
/// One request is one linear pass with no branching back:
/// `Plan → PreStep(optional) → Execute → (Success | Fail→Revert) → Done`.
/// Store calls are awaited strictly in order over the one store handle;
/// nothing is retried.
#[derive(Debug)]
pub struct Executor<S> {
    store: S,
    serializer: Serializer,
}

impl<S: Store> Executor<S> {
    pub fn mysql(store: S) -> Self {
        Self {
            store,
            serializer: Serializer::mysql(),
        }
    }

    pub fn mariadb(store: S) -> Self {
        Self {
            store,
            serializer: Serializer::mariadb(),
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies a column mutation: diffs the desired set against the
    /// store, wraps unsafe collation changes in the two-phase protocol,
    /// and executes one combined statement.
    ///
    /// On failure after pre-steps ran, the pre-converted columns are
    /// restored from their pre-mutation captures and the store's error
    /// is returned; a failed reversion is attached to that error, never
    /// substituted for it.
    pub async fn alter(&mut self, request: &MutationRequest) -> Result<MutationOutcome> {
        let originals =
            ColumnSet::from_columns(self.store.describe_columns(&request.table).await?)?;

        let clauses = diff::build_clauses(&originals, &request.desired)?;
        if clauses.is_empty() {
            return Err(Error::no_change(format!(
                "no tracked field of `{}` differs",
                request.table
            )));
        }

        let guard = CollationGuard::plan(
            &request.table,
            &originals,
            &request.desired,
            &request.indexes,
        );
        let combined = Statement::alter_table(&request.table, clauses, request.options.online_hint);

        let pre: Vec<String> = guard
            .intermediate_statements()
            .iter()
            .map(|statement| self.serializer.serialize(statement))
            .collect();
        let combined_sql = self.serializer.serialize(&combined);

        let mut statements = pre.clone();
        statements.push(combined_sql.clone());

        if request.options.preview_only {
            return Ok(MutationOutcome {
                statements,
                executed: false,
            });
        }

        // Pre-steps run first. A failure midway restores the columns
        // already converted before the failure is reported.
        for (converted, statement) in pre.iter().enumerate() {
            debug!(%statement, "executing collation pre-step");
            if let Err(err) = self.store.execute(statement).await {
                let revert = self.run_revert(guard.revert_first(converted)).await;
                return Err(StoreExecutionError {
                    statement: statement.clone(),
                    message: err.message,
                    revert,
                }
                .into());
            }
        }

        debug!(statement = %combined_sql, "executing combined alteration");
        if let Err(err) = self.store.execute(&combined_sql).await {
            let revert = self.run_revert(guard.revert_statement()).await;
            return Err(StoreExecutionError {
                statement: combined_sql,
                message: err.message,
                revert,
            }
            .into());
        }

        Ok(MutationOutcome {
            statements,
            executed: true,
        })
    }

    /// Reorders a table's columns to `target`, emitting the minimal move
    /// sequence as one combined statement.
    ///
    /// An already-matching order is the distinct no-change signal, not a
    /// failure.
    pub async fn reorder(
        &mut self,
        table: &str,
        target: &[String],
        options: &ExecuteOptions,
    ) -> Result<MutationOutcome> {
        let current = self.store.current_column_order(table).await?;
        let moves = reorder::plan_moves(&current, target)?;
        if moves.is_empty() {
            return Err(Error::no_change(format!(
                "columns of `{table}` are already in the requested order"
            )));
        }

        let originals = ColumnSet::from_columns(self.store.describe_columns(table).await?)?;

        let mut clauses = Vec::with_capacity(moves.len());
        for mv in moves {
            let Some(original) = originals.get(&mv.name) else {
                return Err(Error::validation(format!(
                    "column `{}` is missing from table metadata",
                    mv.name
                )));
            };
            let mut def = original.clone();
            def.position = Some(mv.position);

            // Plain column metadata omits the generation expression;
            // a moved generated column re-fetches it before the clause
            // is built.
            if def.generated.is_some() {
                let expression = self.store.generation_expression(table, &def.name).await?;
                if let (Some(generated), Some(expression)) = (def.generated.as_mut(), expression) {
                    generated.expression = expression;
                }
            }

            // A temporal column whose captured default is the now-marker
            // moves with the marker, not a literal.
            if is_temporal_type(&def.ty) {
                if let ColumnDefault::UserDefined(value) = def.default.clone() {
                    def.default = ColumnDefault::classify(Some(&value), &def.ty, def.nullable);
                }
            }

            clauses.push(ChangeColumn {
                orig_name: def.name.clone(),
                def,
            });
        }

        let combined = Statement::alter_table(table, clauses, options.online_hint);
        let statement = self.serializer.serialize(&combined);
        let statements = vec![statement.clone()];

        if options.preview_only {
            return Ok(MutationOutcome {
                statements,
                executed: false,
            });
        }

        self.execute_statement(&statement).await?;

        Ok(MutationOutcome {
            statements,
            executed: true,
        })
    }

    /// Rewrites a table's partitioning. Partition alterations always run
    /// as their own statement, never combined with column changes. An
    /// empty desired descriptor removes partitioning.
    pub async fn repartition(
        &mut self,
        table: &str,
        desired: &PartitionDescriptor,
        options: &ExecuteOptions,
    ) -> Result<MutationOutcome> {
        let statement = if desired.is_empty() {
            if self.read_partitions(table).await?.is_empty() {
                return Err(Error::no_change(format!("`{table}` is not partitioned")));
            }
            Statement::remove_partitioning(table)
        } else {
            Statement::partition_by(table, desired.clone())
        };

        let statement = self.serializer.serialize(&statement);
        let statements = vec![statement.clone()];

        if options.preview_only {
            return Ok(MutationOutcome {
                statements,
                executed: false,
            });
        }

        self.execute_statement(&statement).await?;

        Ok(MutationOutcome {
            statements,
            executed: true,
        })
    }

    /// Reads the table's current partitioning from its rendered
    /// definition. No definition or no partition clause yields the empty
    /// descriptor.
    pub async fn read_partitions(&mut self, table: &str) -> Result<PartitionDescriptor> {
        let Some(definition) = self.store.render_definition_text(table).await? else {
            return Ok(PartitionDescriptor::default());
        };
        Ok(extract_partitions(&definition))
    }

    async fn execute_statement(&mut self, statement: &str) -> Result<()> {
        debug!(%statement, "executing statement");
        self.store.execute(statement).await.map_err(|err| {
            Error::StoreExecution(StoreExecutionError {
                statement: statement.to_string(),
                message: err.message,
                revert: None,
            })
        })
    }

    /// Executes the corrective reversion, if one applies. Returns the
    /// reversion's own failure so the caller attaches it to the original
    /// error.
    async fn run_revert(&mut self, revert: Option<Statement>) -> Option<RevertExecutionError> {
        let statement = self.serializer.serialize(&revert?);
        warn!(%statement, "alteration failed, restoring pre-converted columns");
        match self.store.execute(&statement).await {
            Ok(()) => None,
            Err(err) => Some(RevertExecutionError {
                statement,
                message: err.message,
            }),
        }
    }
}
