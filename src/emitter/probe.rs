use std::io::{self, Write};

/// Guarded lookup reporting, at import time of the legacy module, that a
/// shim for `name` would shadow an existing symbol.
pub fn write_probe<W: Write>(out: &mut W, legacy_module: &str, name: &str) -> io::Result<()> {
    write!(
        out,
        "\ntry:\n    import {module}\n    x = {module}.{name}\n    print(\"Would override {name}\")\nexcept:\n    pass\n",
        module = legacy_module,
        name = name
    )
}
