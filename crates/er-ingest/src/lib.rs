pub mod columns;
pub mod csv_table;
pub mod decode;
pub mod frame;
pub mod polars_utils;

pub use columns::{
    CANONICAL_COLUMNS, COL_ADMITTED, COL_AGE, COL_DATE, COL_DEPARTMENT, COL_ENCOUNTER_ID,
    COL_GENDER, COL_RACE, COL_SATISFACTION, COL_TIME, COL_WAIT_MINUTES, ColumnMap, resolve_columns,
};
pub use csv_table::{CsvTable, read_csv_table};
pub use decode::decode_encounters;
pub use frame::{EncounterFrame, build_encounter_frame, load_encounter_frame};
pub use polars_utils::{any_to_string, column_value_string, format_numeric, parse_i64};
