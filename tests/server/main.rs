mod helpers;

mod downloads;
mod pages;
