mod cruise;
mod damage;
mod navigation;
mod plugin;
mod properties;
