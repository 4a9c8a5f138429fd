pub mod wrike;
