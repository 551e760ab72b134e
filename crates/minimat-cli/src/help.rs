/// Command reference printed by `help` and appended to `minimat --help`.
pub const COMMAND_REFERENCE: &str = "\
Vector Calculator - Commands
------------------------------------------------------------
Assign / View
  name = x y z           Set a vector (spaces)
  name = x,y,z           Set a vector (commas)
  name = x y             Set (z defaults to 0.0)
  name                   Print the stored vector

Math (spaces around operators are required)
  a + b                  Vector addition
  a - b                  Vector subtraction
  a * s   or   s * a     Scalar multiply (s is a number)
  dot a b                Dot product (prints scalar)
  cross a b              Cross product (prints vector)
  c = a + b              Operation w/ assignment (also -, *, s * a)
  c = cross a b          Assign cross product

Storage
  list                   List all stored vectors
  clear                  Remove all vectors

CSV I/O
  load <file>            Load CSV (clears current vectors first)
                         CSV line format: name,x,y,z
  save <file>            Save all vectors to CSV (overwrite)

Other
  help or -h or ?        Show this help
  quit                   Exit program
------------------------------------------------------------";
