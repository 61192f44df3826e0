mod btree;
mod smart_ptr;
mod vec;
