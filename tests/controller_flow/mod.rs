mod borders;
mod common;
mod dialogs_and_files;
mod railways;
mod stations;
