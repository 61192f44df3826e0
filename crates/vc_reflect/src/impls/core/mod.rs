mod option;
