mod helpers;
mod tests;
