//! Generic libvirt domain binding.
//!
//! Mirrors the libvirt domain format broadly: every optional sub-element lives behind
//! `Option<Box<_>>` and values stay textual, the way a general-purpose binding
//! carries them without interpreting platform semantics.

use serde::Deserialize;

/// Marker for presence-only elements such as `<acpi/>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Flag {}

/// A `<x state='on'/>` style toggle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct State {
    #[serde(rename = "@state")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScaledInteger {
    #[serde(rename = "@unit")]
    pub unit: Option<String>,
    #[serde(rename = "@slots")]
    pub slots: Option<u32>,
    #[serde(rename = "$text")]
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename = "domain")]
pub struct Domain {
    #[serde(rename = "@type")]
    pub domain_type: String,
    #[serde(rename = "@id")]
    pub id: Option<i32>,
    pub name: String,
    pub uuid: Option<String>,
    pub genid: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "maxMemory")]
    pub max_memory: Option<Box<ScaledInteger>>,
    pub memory: Option<Box<ScaledInteger>>,
    #[serde(rename = "currentMemory")]
    pub current_memory: Option<Box<ScaledInteger>>,
    #[serde(rename = "blkiotune")]
    pub blkio_tune: Option<Box<BlkioTune>>,
    #[serde(rename = "memtune")]
    pub mem_tune: Option<Box<MemTune>>,
    #[serde(rename = "memoryBacking")]
    pub memory_backing: Option<Box<MemoryBacking>>,
    pub vcpu: Option<Box<Vcpu>>,
    pub vcpus: Option<Box<Vcpus>>,
    #[serde(rename = "iothreads")]
    pub io_threads: Option<u32>,
    #[serde(rename = "cputune")]
    pub cpu_tune: Option<Box<CpuTune>>,
    #[serde(rename = "numatune")]
    pub numa_tune: Option<Box<NumaTune>>,
    pub resource: Option<Box<Resource>>,
    #[serde(rename = "sysinfo")]
    pub sys_info: Vec<SysInfo>,
    pub bootloader: Option<String>,
    pub os: Option<Box<Os>>,
    pub features: Option<Box<Features>>,
    pub cpu: Option<Box<Cpu>>,
    pub clock: Option<Box<Clock>>,
    pub on_poweroff: Option<String>,
    pub on_reboot: Option<String>,
    pub on_crash: Option<String>,
    pub on_lockfailure: Option<String>,
    pub pm: Option<Box<Pm>>,
    pub perf: Option<Box<Perf>>,
    pub devices: Option<Box<Devices>>,
    #[serde(rename = "seclabel")]
    pub sec_labels: Vec<SecLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlkioTune {
    pub weight: Option<u32>,
    #[serde(rename = "device")]
    pub devices: Vec<BlkioDevice>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlkioDevice {
    pub path: String,
    pub weight: Option<u32>,
    pub read_bytes_sec: Option<u64>,
    pub write_bytes_sec: Option<u64>,
    pub read_iops_sec: Option<u64>,
    pub write_iops_sec: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemTune {
    pub hard_limit: Option<Box<ScaledInteger>>,
    pub soft_limit: Option<Box<ScaledInteger>>,
    pub min_guarantee: Option<Box<ScaledInteger>>,
    pub swap_hard_limit: Option<Box<ScaledInteger>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryBacking {
    #[serde(rename = "hugepages")]
    pub huge_pages: Option<Box<HugePages>>,
    #[serde(rename = "nosharepages")]
    pub no_share_pages: Option<Flag>,
    pub locked: Option<Flag>,
    pub source: Option<Box<MemorySource>>,
    pub access: Option<Box<MemoryAccess>>,
    pub allocation: Option<Box<MemoryAllocation>>,
    pub discard: Option<Flag>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HugePages {
    pub page: Vec<HugePage>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HugePage {
    #[serde(rename = "@size")]
    pub size: Option<u64>,
    #[serde(rename = "@unit")]
    pub unit: Option<String>,
    #[serde(rename = "@nodeset")]
    pub nodeset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemorySource {
    #[serde(rename = "@type")]
    pub source_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryAccess {
    #[serde(rename = "@mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryAllocation {
    #[serde(rename = "@mode")]
    pub mode: Option<String>,
    #[serde(rename = "@threads")]
    pub threads: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vcpu {
    #[serde(rename = "@placement")]
    pub placement: Option<String>,
    #[serde(rename = "@cpuset")]
    pub cpuset: Option<String>,
    #[serde(rename = "@current")]
    pub current: Option<u32>,
    #[serde(rename = "$text")]
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vcpus {
    pub vcpu: Vec<VcpusVcpu>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VcpusVcpu {
    #[serde(rename = "@id")]
    pub id: Option<u32>,
    #[serde(rename = "@enabled")]
    pub enabled: Option<String>,
    #[serde(rename = "@hotpluggable")]
    pub hotpluggable: Option<String>,
    #[serde(rename = "@order")]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuTune {
    pub shares: Option<u64>,
    pub period: Option<u64>,
    pub quota: Option<i64>,
    pub emulator_period: Option<u64>,
    pub emulator_quota: Option<i64>,
    #[serde(rename = "vcpupin")]
    pub vcpu_pins: Vec<CpuPin>,
    #[serde(rename = "emulatorpin")]
    pub emulator_pin: Option<Box<CpuPin>>,
    #[serde(rename = "iothreadpin")]
    pub io_thread_pins: Vec<CpuPin>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuPin {
    #[serde(rename = "@vcpu")]
    pub vcpu: Option<u32>,
    #[serde(rename = "@iothread")]
    pub io_thread: Option<u32>,
    #[serde(rename = "@cpuset")]
    pub cpuset: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumaTune {
    pub memory: Option<Box<NumaTuneMemory>>,
    #[serde(rename = "memnode")]
    pub mem_nodes: Vec<NumaTuneMemNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumaTuneMemory {
    #[serde(rename = "@mode")]
    pub mode: Option<String>,
    #[serde(rename = "@nodeset")]
    pub nodeset: Option<String>,
    #[serde(rename = "@placement")]
    pub placement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumaTuneMemNode {
    #[serde(rename = "@cellid")]
    pub cell_id: u32,
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@nodeset")]
    pub nodeset: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub partition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SysInfo {
    #[serde(rename = "@type")]
    pub sysinfo_type: String,
    pub bios: Option<Box<SysInfoEntries>>,
    pub system: Option<Box<SysInfoEntries>>,
    #[serde(rename = "baseBoard")]
    pub base_board: Vec<SysInfoEntries>,
    pub chassis: Option<Box<SysInfoEntries>>,
    #[serde(rename = "oemStrings")]
    pub oem_strings: Option<Box<OemStrings>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SysInfoEntries {
    pub entry: Vec<SysInfoEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SysInfoEntry {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OemStrings {
    pub entry: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Os {
    #[serde(rename = "@firmware")]
    pub firmware: Option<String>,
    #[serde(rename = "type")]
    pub os_type: Option<Box<OsType>>,
    #[serde(rename = "firmware")]
    pub firmware_info: Option<Box<FirmwareInfo>>,
    pub init: Option<String>,
    #[serde(rename = "initarg")]
    pub init_args: Vec<String>,
    pub loader: Option<Box<Loader>>,
    pub nvram: Option<Box<Nvram>>,
    pub kernel: Option<String>,
    pub initrd: Option<String>,
    pub cmdline: Option<String>,
    pub dtb: Option<String>,
    #[serde(rename = "boot")]
    pub boot_devices: Vec<BootDevice>,
    #[serde(rename = "bootmenu")]
    pub boot_menu: Option<Box<BootMenu>>,
    pub bios: Option<Box<Bios>>,
    pub smbios: Option<Box<Smbios>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsType {
    #[serde(rename = "@arch")]
    pub arch: Option<String>,
    #[serde(rename = "@machine")]
    pub machine: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FirmwareInfo {
    pub feature: Vec<FirmwareFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FirmwareFeature {
    #[serde(rename = "@enabled")]
    pub enabled: String,
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Loader {
    #[serde(rename = "@readonly")]
    pub readonly: Option<String>,
    #[serde(rename = "@secure")]
    pub secure: Option<String>,
    #[serde(rename = "@type")]
    pub loader_type: Option<String>,
    #[serde(rename = "$text")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Nvram {
    #[serde(rename = "@template")]
    pub template: Option<String>,
    #[serde(rename = "$text")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BootDevice {
    #[serde(rename = "@dev")]
    pub dev: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BootMenu {
    #[serde(rename = "@enable")]
    pub enable: String,
    #[serde(rename = "@timeout")]
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bios {
    #[serde(rename = "@useserial")]
    pub use_serial: Option<String>,
    #[serde(rename = "@rebootTimeout")]
    pub reboot_timeout: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Smbios {
    #[serde(rename = "@mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Features {
    pub pae: Option<Flag>,
    pub acpi: Option<Flag>,
    pub apic: Option<Box<Apic>>,
    pub hap: Option<State>,
    pub viridian: Option<Flag>,
    #[serde(rename = "privnet")]
    pub priv_net: Option<Flag>,
    pub hyperv: Option<Box<HyperV>>,
    pub kvm: Option<Box<Kvm>>,
    pub pvspinlock: Option<State>,
    pub pmu: Option<State>,
    pub vmport: Option<State>,
    pub gic: Option<Box<Gic>>,
    pub smm: Option<State>,
    #[serde(rename = "ioapic")]
    pub io_apic: Option<Box<IoApic>>,
    #[serde(rename = "vmcoreinfo")]
    pub vm_core_info: Option<State>,
    #[serde(rename = "htm")]
    pub htm: Option<State>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Apic {
    #[serde(rename = "@eoi")]
    pub eoi: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HyperV {
    #[serde(rename = "@mode")]
    pub mode: Option<String>,
    pub relaxed: Option<State>,
    pub vapic: Option<State>,
    pub spinlocks: Option<Box<HyperVSpinlocks>>,
    pub vpindex: Option<State>,
    pub runtime: Option<State>,
    pub synic: Option<State>,
    pub stimer: Option<Box<HyperVStimer>>,
    pub reset: Option<State>,
    pub vendor_id: Option<Box<HyperVVendorId>>,
    pub frequencies: Option<State>,
    pub reenlightenment: Option<State>,
    pub tlbflush: Option<State>,
    pub ipi: Option<State>,
    pub evmcs: Option<State>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HyperVSpinlocks {
    #[serde(rename = "@state")]
    pub state: Option<String>,
    #[serde(rename = "@retries")]
    pub retries: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HyperVStimer {
    #[serde(rename = "@state")]
    pub state: Option<String>,
    pub direct: Option<State>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HyperVVendorId {
    #[serde(rename = "@state")]
    pub state: Option<String>,
    #[serde(rename = "@value")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Kvm {
    pub hidden: Option<State>,
    #[serde(rename = "hint-dedicated")]
    pub hint_dedicated: Option<State>,
    #[serde(rename = "poll-control")]
    pub poll_control: Option<State>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Gic {
    #[serde(rename = "@version")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IoApic {
    #[serde(rename = "@driver")]
    pub driver: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cpu {
    #[serde(rename = "@mode")]
    pub mode: Option<String>,
    #[serde(rename = "@match")]
    pub match_: Option<String>,
    #[serde(rename = "@check")]
    pub check: Option<String>,
    #[serde(rename = "@migratable")]
    pub migratable: Option<String>,
    pub model: Option<Box<CpuModel>>,
    pub vendor: Option<String>,
    pub topology: Option<Box<CpuTopology>>,
    pub cache: Option<Box<CpuCache>>,
    #[serde(rename = "feature")]
    pub features: Vec<CpuFeature>,
    pub numa: Option<Box<CpuNuma>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuModel {
    #[serde(rename = "@fallback")]
    pub fallback: Option<String>,
    #[serde(rename = "@vendor_id")]
    pub vendor_id: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuTopology {
    #[serde(rename = "@sockets")]
    pub sockets: u32,
    #[serde(rename = "@dies")]
    pub dies: Option<u32>,
    #[serde(rename = "@cores")]
    pub cores: u32,
    #[serde(rename = "@threads")]
    pub threads: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuCache {
    #[serde(rename = "@level")]
    pub level: Option<u32>,
    #[serde(rename = "@mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuFeature {
    #[serde(rename = "@policy")]
    pub policy: Option<String>,
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuNuma {
    pub cell: Vec<CpuNumaCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuNumaCell {
    #[serde(rename = "@id")]
    pub id: Option<u32>,
    #[serde(rename = "@cpus")]
    pub cpus: Option<String>,
    #[serde(rename = "@memory")]
    pub memory: u64,
    #[serde(rename = "@unit")]
    pub unit: Option<String>,
    #[serde(rename = "@memAccess")]
    pub mem_access: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Clock {
    #[serde(rename = "@offset")]
    pub offset: Option<String>,
    #[serde(rename = "@timezone")]
    pub timezone: Option<String>,
    #[serde(rename = "@adjustment")]
    pub adjustment: Option<String>,
    #[serde(rename = "timer")]
    pub timers: Vec<Timer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timer {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@track")]
    pub track: Option<String>,
    #[serde(rename = "@tickpolicy")]
    pub tick_policy: Option<String>,
    #[serde(rename = "@present")]
    pub present: Option<String>,
    #[serde(rename = "@frequency")]
    pub frequency: Option<u64>,
    #[serde(rename = "@mode")]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Pm {
    #[serde(rename = "suspend-to-mem")]
    pub suspend_to_mem: Option<Box<PmPolicy>>,
    #[serde(rename = "suspend-to-disk")]
    pub suspend_to_disk: Option<Box<PmPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PmPolicy {
    #[serde(rename = "@enabled")]
    pub enabled: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Perf {
    pub event: Vec<PerfEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerfEvent {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@enabled")]
    pub enabled: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Devices {
    pub emulator: Option<String>,
    #[serde(rename = "disk")]
    pub disks: Vec<Disk>,
    #[serde(rename = "controller")]
    pub controllers: Vec<Controller>,
    #[serde(rename = "filesystem")]
    pub filesystems: Vec<Filesystem>,
    #[serde(rename = "interface")]
    pub interfaces: Vec<Interface>,
    #[serde(rename = "serial")]
    pub serials: Vec<CharDevice>,
    #[serde(rename = "parallel")]
    pub parallels: Vec<CharDevice>,
    #[serde(rename = "console")]
    pub consoles: Vec<CharDevice>,
    #[serde(rename = "channel")]
    pub channels: Vec<CharDevice>,
    #[serde(rename = "input")]
    pub inputs: Vec<Input>,
    #[serde(rename = "tpm")]
    pub tpms: Vec<Tpm>,
    #[serde(rename = "graphics")]
    pub graphics: Vec<Graphics>,
    #[serde(rename = "sound")]
    pub sounds: Vec<Sound>,
    #[serde(rename = "audio")]
    pub audios: Vec<Audio>,
    #[serde(rename = "video")]
    pub videos: Vec<Video>,
    #[serde(rename = "hostdev")]
    pub host_devs: Vec<HostDev>,
    #[serde(rename = "redirdev")]
    pub redir_devs: Vec<RedirDev>,
    #[serde(rename = "watchdog")]
    pub watchdogs: Vec<Watchdog>,
    #[serde(rename = "memballoon")]
    pub mem_balloon: Option<Box<MemBalloon>>,
    #[serde(rename = "rng")]
    pub rngs: Vec<Rng>,
    #[serde(rename = "panic")]
    pub panics: Vec<Panic>,
    #[serde(rename = "vsock")]
    pub vsock: Option<Box<Vsock>>,
    #[serde(rename = "iommu")]
    pub iommu: Option<Box<Iommu>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "@type")]
    pub address_type: Option<String>,
    #[serde(rename = "@domain")]
    pub domain: Option<String>,
    #[serde(rename = "@bus")]
    pub bus: Option<String>,
    #[serde(rename = "@slot")]
    pub slot: Option<String>,
    #[serde(rename = "@function")]
    pub function: Option<String>,
    #[serde(rename = "@multifunction")]
    pub multifunction: Option<String>,
    #[serde(rename = "@controller")]
    pub controller: Option<String>,
    #[serde(rename = "@target")]
    pub target: Option<String>,
    #[serde(rename = "@unit")]
    pub unit: Option<String>,
    #[serde(rename = "@port")]
    pub port: Option<String>,
    #[serde(rename = "@reg")]
    pub reg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alias {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Boot {
    #[serde(rename = "@order")]
    pub order: u32,
    #[serde(rename = "@loadparm")]
    pub load_parm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Model {
    #[serde(rename = "@type")]
    pub model_type: Option<String>,
    #[serde(rename = "@name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Disk {
    #[serde(rename = "@type")]
    pub disk_type: Option<String>,
    #[serde(rename = "@device")]
    pub device: Option<String>,
    #[serde(rename = "@snapshot")]
    pub snapshot: Option<String>,
    pub driver: Option<Box<DiskDriver>>,
    pub auth: Option<Box<DiskAuth>>,
    pub source: Option<Box<DiskSource>>,
    #[serde(rename = "backingStore")]
    pub backing_store: Option<Box<BackingStore>>,
    pub target: Option<Box<DiskTarget>>,
    #[serde(rename = "iotune")]
    pub io_tune: Option<Box<DiskIoTune>>,
    #[serde(rename = "blockio")]
    pub block_io: Option<Box<BlockIo>>,
    pub readonly: Option<Flag>,
    pub shareable: Option<Flag>,
    pub transient: Option<Flag>,
    pub serial: Option<String>,
    pub wwn: Option<String>,
    pub vendor: Option<String>,
    pub product: Option<String>,
    pub boot: Option<Box<Boot>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskDriver {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@type")]
    pub driver_type: Option<String>,
    #[serde(rename = "@cache")]
    pub cache: Option<String>,
    #[serde(rename = "@error_policy")]
    pub error_policy: Option<String>,
    #[serde(rename = "@io")]
    pub io: Option<String>,
    #[serde(rename = "@discard")]
    pub discard: Option<String>,
    #[serde(rename = "@iothread")]
    pub io_thread: Option<u32>,
    #[serde(rename = "@queues")]
    pub queues: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskAuth {
    #[serde(rename = "@username")]
    pub username: Option<String>,
    pub secret: Option<Box<DiskSecret>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskSecret {
    #[serde(rename = "@type")]
    pub secret_type: Option<String>,
    #[serde(rename = "@usage")]
    pub usage: Option<String>,
    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskSource {
    #[serde(rename = "@file")]
    pub file: Option<String>,
    #[serde(rename = "@dev")]
    pub dev: Option<String>,
    #[serde(rename = "@dir")]
    pub dir: Option<String>,
    #[serde(rename = "@protocol")]
    pub protocol: Option<String>,
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@pool")]
    pub pool: Option<String>,
    #[serde(rename = "@volume")]
    pub volume: Option<String>,
    #[serde(rename = "@startupPolicy")]
    pub startup_policy: Option<String>,
    #[serde(rename = "@index")]
    pub index: Option<u32>,
    pub host: Vec<DiskHost>,
    pub seclabel: Vec<SecLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskHost {
    #[serde(rename = "@transport")]
    pub transport: Option<String>,
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@port")]
    pub port: Option<String>,
    #[serde(rename = "@socket")]
    pub socket: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackingStore {
    #[serde(rename = "@type")]
    pub store_type: Option<String>,
    #[serde(rename = "@index")]
    pub index: Option<u32>,
    pub format: Option<Box<Model>>,
    pub source: Option<Box<DiskSource>>,
    #[serde(rename = "backingStore")]
    pub backing_store: Option<Box<BackingStore>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskTarget {
    #[serde(rename = "@dev")]
    pub dev: String,
    #[serde(rename = "@bus")]
    pub bus: Option<String>,
    #[serde(rename = "@tray")]
    pub tray: Option<String>,
    #[serde(rename = "@removable")]
    pub removable: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskIoTune {
    pub total_bytes_sec: Option<u64>,
    pub read_bytes_sec: Option<u64>,
    pub write_bytes_sec: Option<u64>,
    pub total_iops_sec: Option<u64>,
    pub read_iops_sec: Option<u64>,
    pub write_iops_sec: Option<u64>,
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlockIo {
    #[serde(rename = "@logical_block_size")]
    pub logical_block_size: Option<u32>,
    #[serde(rename = "@physical_block_size")]
    pub physical_block_size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Controller {
    #[serde(rename = "@type")]
    pub controller_type: String,
    #[serde(rename = "@index")]
    pub index: Option<u32>,
    #[serde(rename = "@model")]
    pub model: Option<String>,
    #[serde(rename = "@ports")]
    pub ports: Option<u32>,
    #[serde(rename = "@vectors")]
    pub vectors: Option<u32>,
    pub driver: Option<Box<ControllerDriver>>,
    pub target: Option<Box<ControllerTarget>>,
    #[serde(rename = "model")]
    pub model_info: Option<Box<Model>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerDriver {
    #[serde(rename = "@queues")]
    pub queues: Option<u32>,
    #[serde(rename = "@iothread")]
    pub io_thread: Option<u32>,
    #[serde(rename = "@iommu")]
    pub iommu: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerTarget {
    #[serde(rename = "@chassis")]
    pub chassis: Option<u32>,
    #[serde(rename = "@port")]
    pub port: Option<String>,
    #[serde(rename = "@busNr")]
    pub bus_nr: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Filesystem {
    #[serde(rename = "@type")]
    pub fs_type: Option<String>,
    #[serde(rename = "@accessmode")]
    pub access_mode: Option<String>,
    pub driver: Option<Box<Model>>,
    pub source: Option<Box<FilesystemSource>>,
    pub target: Option<Box<FilesystemTarget>>,
    pub readonly: Option<Flag>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesystemSource {
    #[serde(rename = "@dir")]
    pub dir: Option<String>,
    #[serde(rename = "@socket")]
    pub socket: Option<String>,
    #[serde(rename = "@file")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesystemTarget {
    #[serde(rename = "@dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Interface {
    #[serde(rename = "@type")]
    pub interface_type: Option<String>,
    #[serde(rename = "@managed")]
    pub managed: Option<String>,
    pub mac: Option<Box<MacAddress>>,
    pub source: Option<Box<InterfaceSource>>,
    #[serde(rename = "virtualport")]
    pub virtual_port: Option<Box<Model>>,
    pub target: Option<Box<InterfaceTarget>>,
    pub model: Option<Box<Model>>,
    pub driver: Option<Box<InterfaceDriver>>,
    pub mtu: Option<Box<InterfaceMtu>>,
    pub link: Option<State>,
    pub boot: Option<Box<Boot>>,
    pub rom: Option<Box<Rom>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MacAddress {
    #[serde(rename = "@address")]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceSource {
    #[serde(rename = "@bridge")]
    pub bridge: Option<String>,
    #[serde(rename = "@network")]
    pub network: Option<String>,
    #[serde(rename = "@portgroup")]
    pub port_group: Option<String>,
    #[serde(rename = "@dev")]
    pub dev: Option<String>,
    #[serde(rename = "@mode")]
    pub mode: Option<String>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceTarget {
    #[serde(rename = "@dev")]
    pub dev: String,
    #[serde(rename = "@managed")]
    pub managed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceDriver {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@queues")]
    pub queues: Option<u32>,
    #[serde(rename = "@rx_queue_size")]
    pub rx_queue_size: Option<u32>,
    #[serde(rename = "@tx_queue_size")]
    pub tx_queue_size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceMtu {
    #[serde(rename = "@size")]
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rom {
    #[serde(rename = "@bar")]
    pub bar: Option<String>,
    #[serde(rename = "@file")]
    pub file: Option<String>,
    #[serde(rename = "@enabled")]
    pub enabled: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CharDevice {
    #[serde(rename = "@type")]
    pub char_type: Option<String>,
    pub source: Option<Box<CharSource>>,
    pub protocol: Option<Box<Model>>,
    pub log: Option<Box<CharLog>>,
    pub target: Option<Box<CharTarget>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CharSource {
    #[serde(rename = "@mode")]
    pub mode: Option<String>,
    #[serde(rename = "@path")]
    pub path: Option<String>,
    #[serde(rename = "@host")]
    pub host: Option<String>,
    #[serde(rename = "@service")]
    pub service: Option<String>,
    #[serde(rename = "@channel")]
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CharLog {
    #[serde(rename = "@file")]
    pub file: String,
    #[serde(rename = "@append")]
    pub append: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CharTarget {
    #[serde(rename = "@type")]
    pub target_type: Option<String>,
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@state")]
    pub state: Option<String>,
    #[serde(rename = "@port")]
    pub port: Option<u32>,
    pub model: Option<Box<Model>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Input {
    #[serde(rename = "@type")]
    pub input_type: String,
    #[serde(rename = "@bus")]
    pub bus: Option<String>,
    #[serde(rename = "@model")]
    pub model: Option<String>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tpm {
    #[serde(rename = "@model")]
    pub model: Option<String>,
    pub backend: Option<Box<TpmBackend>>,
    pub alias: Option<Box<Alias>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TpmBackend {
    #[serde(rename = "@type")]
    pub backend_type: String,
    #[serde(rename = "@version")]
    pub version: Option<String>,
    #[serde(rename = "@persistent_state")]
    pub persistent_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Graphics {
    #[serde(rename = "@type")]
    pub graphics_type: String,
    #[serde(rename = "@port")]
    pub port: Option<i32>,
    #[serde(rename = "@autoport")]
    pub autoport: Option<String>,
    #[serde(rename = "@listen")]
    pub listen_address: Option<String>,
    #[serde(rename = "@passwd")]
    pub passwd: Option<String>,
    #[serde(rename = "@keymap")]
    pub keymap: Option<String>,
    pub listen: Vec<GraphicsListen>,
    pub image: Option<Box<GraphicsCompression>>,
    pub gl: Option<Box<GraphicsGl>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphicsListen {
    #[serde(rename = "@type")]
    pub listen_type: String,
    #[serde(rename = "@address")]
    pub address: Option<String>,
    #[serde(rename = "@network")]
    pub network: Option<String>,
    #[serde(rename = "@socket")]
    pub socket: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphicsCompression {
    #[serde(rename = "@compression")]
    pub compression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphicsGl {
    #[serde(rename = "@enable")]
    pub enable: String,
    #[serde(rename = "@rendernode")]
    pub render_node: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sound {
    #[serde(rename = "@model")]
    pub model: String,
    pub codec: Vec<Model>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Audio {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@type")]
    pub audio_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Video {
    pub model: Option<Box<VideoModel>>,
    pub driver: Option<Box<Model>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoModel {
    #[serde(rename = "@type")]
    pub model_type: String,
    #[serde(rename = "@heads")]
    pub heads: Option<u32>,
    #[serde(rename = "@ram")]
    pub ram: Option<u32>,
    #[serde(rename = "@vram")]
    pub vram: Option<u32>,
    #[serde(rename = "@vgamem")]
    pub vgamem: Option<u32>,
    #[serde(rename = "@primary")]
    pub primary: Option<String>,
    pub acceleration: Option<Box<VideoAcceleration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoAcceleration {
    #[serde(rename = "@accel3d")]
    pub accel3d: Option<String>,
    #[serde(rename = "@accel2d")]
    pub accel2d: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostDev {
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@type")]
    pub hostdev_type: String,
    #[serde(rename = "@managed")]
    pub managed: Option<String>,
    #[serde(rename = "@model")]
    pub model: Option<String>,
    pub source: Option<Box<HostDevSource>>,
    pub driver: Option<Box<Model>>,
    pub boot: Option<Box<Boot>>,
    pub rom: Option<Box<Rom>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostDevSource {
    #[serde(rename = "@startupPolicy")]
    pub startup_policy: Option<String>,
    pub address: Option<Box<Address>>,
    pub vendor: Option<Box<HostDevId>>,
    pub product: Option<Box<HostDevId>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostDevId {
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RedirDev {
    #[serde(rename = "@bus")]
    pub bus: String,
    #[serde(rename = "@type")]
    pub redir_type: String,
    pub source: Option<Box<CharSource>>,
    pub boot: Option<Box<Boot>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Watchdog {
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "@action")]
    pub action: Option<String>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemBalloon {
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "@autodeflate")]
    pub auto_deflate: Option<String>,
    #[serde(rename = "@freePageReporting")]
    pub free_page_reporting: Option<String>,
    pub stats: Option<Box<MemBalloonStats>>,
    pub driver: Option<Box<ControllerDriver>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemBalloonStats {
    #[serde(rename = "@period")]
    pub period: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rng {
    #[serde(rename = "@model")]
    pub model: String,
    pub rate: Option<Box<RngRate>>,
    pub backend: Option<Box<RngBackend>>,
    pub driver: Option<Box<ControllerDriver>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RngRate {
    #[serde(rename = "@bytes")]
    pub bytes: u32,
    #[serde(rename = "@period")]
    pub period: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RngBackend {
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "$text")]
    pub device: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Panic {
    #[serde(rename = "@model")]
    pub model: Option<String>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vsock {
    #[serde(rename = "@model")]
    pub model: Option<String>,
    pub cid: Option<Box<VsockCid>>,
    pub alias: Option<Box<Alias>>,
    pub address: Option<Box<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VsockCid {
    #[serde(rename = "@auto")]
    pub auto: Option<String>,
    #[serde(rename = "@address")]
    pub address: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Iommu {
    #[serde(rename = "@model")]
    pub model: String,
    pub driver: Option<Box<IommuDriver>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IommuDriver {
    #[serde(rename = "@intremap")]
    pub intremap: Option<String>,
    #[serde(rename = "@caching_mode")]
    pub caching_mode: Option<String>,
    #[serde(rename = "@eim")]
    pub eim: Option<String>,
    #[serde(rename = "@iotlb")]
    pub iotlb: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SecLabel {
    #[serde(rename = "@type")]
    pub label_type: Option<String>,
    #[serde(rename = "@model")]
    pub model: Option<String>,
    #[serde(rename = "@relabel")]
    pub relabel: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "imagelabel")]
    pub image_label: Option<String>,
    #[serde(rename = "baselabel")]
    pub base_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{fixtures, DomainSchema};

    #[test]
    fn decodes_core_fields() {
        let d = Domain::decode(fixtures::FEDORA_Q35.as_bytes()).unwrap();

        assert_eq!(d.domain_type, "kvm");
        assert_eq!(d.name, "fedora-q35");
        assert_eq!(d.uuid.as_deref(), Some("c7a5fdbd-cdaf-9455-926a-d65c16db1809"));

        let memory = d.memory.as_deref().unwrap();
        assert_eq!(memory.value, 4194304);
        assert_eq!(memory.unit.as_deref(), Some("KiB"));

        let vcpu = d.vcpu.as_deref().unwrap();
        assert_eq!(vcpu.value, 4);
        assert_eq!(vcpu.placement.as_deref(), Some("static"));

        let os_type = d.os.as_deref().and_then(|os| os.os_type.as_deref()).unwrap();
        assert_eq!(os_type.value, "hvm");
        assert_eq!(os_type.machine.as_deref(), Some("pc-q35-8.1"));
    }

    #[test]
    fn decodes_devices() {
        let d = Domain::decode(fixtures::FEDORA_Q35.as_bytes()).unwrap();
        let devices = d.devices.as_deref().unwrap();

        assert_eq!(devices.disks.len(), 2);
        assert_eq!(
            devices.disks[0].target.as_deref().map(|t| t.dev.as_str()),
            Some("vda")
        );
        assert_eq!(devices.interfaces.len(), 1);
        assert_eq!(
            devices.interfaces[0].mac.as_deref().map(|m| m.address.as_str()),
            Some("52:54:00:6b:3c:58")
        );
        assert!(devices.controllers.len() >= 3);
        assert_eq!(devices.serials.len(), 1);
        assert_eq!(devices.consoles.len(), 1);
        assert_eq!(devices.channels.len(), 1);
        assert!(devices.mem_balloon.is_some());
    }

    #[test]
    fn presence_flags_and_toggles() {
        let d = Domain::decode(fixtures::FEDORA_Q35.as_bytes()).unwrap();
        let features = d.features.as_deref().unwrap();

        assert!(features.acpi.is_some());
        assert!(features.pae.is_none());
        assert_eq!(
            features.vmport.as_ref().and_then(|v| v.state.as_deref()),
            Some("off")
        );
    }

    #[test]
    fn minimal_domain_leaves_optional_parts_empty() {
        let d = Domain::decode(fixtures::MINIMAL.as_bytes()).unwrap();
        assert_eq!(d.name, "minimal");
        assert!(d.cpu.is_none());
        assert!(d.sec_labels.is_empty());
    }
}
