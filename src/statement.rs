//! Conditional DDL: run a statement and ignore one specific failure.

/// Wrap `sql` in an anonymous PL/SQL block that runs it with
/// `execute immediate` and swallows the error whose `sqlcode` equals
/// `error_number_to_catch`. Any other error is re-raised.
///
/// Oracle reports `sqlcode` as the negated ORA- number, so
/// "ORA-00942: table or view does not exist" is `-942`; see the
/// `SQLCODE_*` constants.
///
/// # Example
///
/// ```
/// use oracle_dialect_utils::constants::SQLCODE_TABLE_OR_VIEW_DOES_NOT_EXIST;
/// use oracle_dialect_utils::wrap_sql_with_catch;
///
/// let sql = wrap_sql_with_catch("drop table \"users\"", SQLCODE_TABLE_OR_VIEW_DOES_NOT_EXIST);
/// assert!(sql.starts_with("begin execute immediate 'drop table \"users\"';"));
/// ```
pub fn wrap_sql_with_catch(sql: &str, error_number_to_catch: i32) -> String {
    format!(
        "begin execute immediate '{}'; \
         exception when others then if sqlcode != {} then raise; \
         end if; \
         end;",
        sql.replace('\'', "''"),
        error_number_to_catch
    )
}
