mod hash;
mod sync;
