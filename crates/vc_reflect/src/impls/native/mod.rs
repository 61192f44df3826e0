mod array;
mod scalar;
