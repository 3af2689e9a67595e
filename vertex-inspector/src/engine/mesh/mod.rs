pub mod box_lattice;
