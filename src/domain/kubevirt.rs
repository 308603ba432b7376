//! KubeVirt launcher domain schema.
//!
//! Covers the parts of the domain a virt-launcher reads back: sub-elements are held
//! inline, and values the launcher interprets (sizes, counts, ports) are typed.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureState {
    #[serde(rename = "@state")]
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Memory {
    #[serde(rename = "$text")]
    pub value: u64,
    #[serde(rename = "@unit")]
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename = "domain")]
pub struct DomainSpec {
    #[serde(rename = "@type")]
    pub domain_type: String,
    pub name: String,
    pub uuid: String,
    pub memory: Memory,
    #[serde(rename = "currentMemory")]
    pub current_memory: Option<Memory>,
    #[serde(rename = "maxMemory")]
    pub max_memory: Option<MaxMemory>,
    #[serde(rename = "memoryBacking")]
    pub memory_backing: Option<MemoryBacking>,
    pub os: Os,
    #[serde(rename = "sysinfo")]
    pub sys_info: Option<SysInfo>,
    pub devices: Devices,
    pub clock: Option<Clock>,
    pub resource: Option<Resource>,
    pub features: Option<Features>,
    pub cpu: Cpu,
    pub vcpu: Option<Vcpu>,
    #[serde(rename = "cputune")]
    pub cpu_tune: Option<CpuTune>,
    #[serde(rename = "numatune")]
    pub numa_tune: Option<NumaTune>,
    #[serde(rename = "iothreads")]
    pub io_threads: Option<u32>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MaxMemory {
    #[serde(rename = "$text")]
    pub value: u64,
    #[serde(rename = "@unit")]
    pub unit: String,
    #[serde(rename = "@slots")]
    pub slots: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryBacking {
    #[serde(rename = "hugepages")]
    pub huge_pages: Option<HugePages>,
    pub source: Option<MemoryBackingSource>,
    pub access: Option<MemoryBackingAccess>,
    pub allocation: Option<MemoryAllocation>,
    #[serde(rename = "nosharepages")]
    pub no_share_pages: Option<Empty>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HugePages {
    #[serde(rename = "page")]
    pub pages: Vec<HugePage>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HugePage {
    #[serde(rename = "@size")]
    pub size: String,
    #[serde(rename = "@unit")]
    pub unit: String,
    #[serde(rename = "@nodeset")]
    pub node_set: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryBackingSource {
    #[serde(rename = "@type")]
    pub source_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryBackingAccess {
    #[serde(rename = "@mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryAllocation {
    #[serde(rename = "@mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(rename = "kubevirt")]
    pub kubevirt: KubeVirtMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KubeVirtMetadata {
    pub uid: String,
    #[serde(rename = "graceperiod")]
    pub grace_period: Option<GracePeriodMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GracePeriodMetadata {
    #[serde(rename = "deletionGracePeriodSeconds")]
    pub deletion_grace_period_seconds: i64,
    #[serde(rename = "deletionTimestamp")]
    pub deletion_timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Os {
    #[serde(rename = "type")]
    pub os_type: OsType,
    #[serde(rename = "acpi")]
    pub acpi: Option<OsAcpi>,
    #[serde(rename = "smbios")]
    pub smbios: Option<SmBios>,
    #[serde(rename = "boot")]
    pub boot_order: Vec<Boot>,
    #[serde(rename = "bootmenu")]
    pub boot_menu: Option<BootMenu>,
    #[serde(rename = "bios")]
    pub bios: Option<Bios>,
    #[serde(rename = "loader")]
    pub boot_loader: Option<Loader>,
    #[serde(rename = "nvram")]
    pub nvram: Option<Nvram>,
    pub kernel: Option<String>,
    pub initrd: Option<String>,
    #[serde(rename = "cmdline")]
    pub kernel_args: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsType {
    #[serde(rename = "$text")]
    pub os: String,
    #[serde(rename = "@arch")]
    pub arch: String,
    #[serde(rename = "@machine")]
    pub machine: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsAcpi {
    pub table: Vec<AcpiTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AcpiTable {
    #[serde(rename = "$text")]
    pub path: String,
    #[serde(rename = "@type")]
    pub table_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmBios {
    #[serde(rename = "@mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Boot {
    #[serde(rename = "@dev")]
    pub dev: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BootMenu {
    #[serde(rename = "@enable")]
    pub enable: String,
    #[serde(rename = "@timeout")]
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bios {
    #[serde(rename = "@useserial")]
    pub use_serial: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Loader {
    #[serde(rename = "$text")]
    pub path: String,
    #[serde(rename = "@readonly")]
    pub read_only: String,
    #[serde(rename = "@secure")]
    pub secure: String,
    #[serde(rename = "@type")]
    pub loader_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Nvram {
    #[serde(rename = "$text")]
    pub nvram: String,
    #[serde(rename = "@template")]
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SysInfo {
    #[serde(rename = "@type")]
    pub sysinfo_type: String,
    pub system: Vec<Entry>,
    pub bios: Vec<Entry>,
    #[serde(rename = "baseBoard")]
    pub base_board: Vec<Entry>,
    pub chassis: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Clock {
    #[serde(rename = "@offset")]
    pub offset: String,
    #[serde(rename = "@timezone")]
    pub timezone: String,
    #[serde(rename = "@adjustment")]
    pub adjustment: String,
    #[serde(rename = "timer")]
    pub timers: Vec<Timer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timer {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@tickpolicy")]
    pub tick_policy: String,
    #[serde(rename = "@present")]
    pub present: String,
    #[serde(rename = "@track")]
    pub track: String,
    #[serde(rename = "@frequency")]
    pub frequency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub partition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Features {
    pub acpi: Option<Empty>,
    pub apic: Option<FeatureEnabled>,
    pub hyperv: Option<FeatureHyperv>,
    pub smm: Option<Empty>,
    pub kvm: Option<FeatureKvm>,
    pub pvspinlock: Option<FeatureState>,
    pub pmu: Option<FeatureState>,
    pub vmport: Option<FeatureState>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureEnabled {
    #[serde(rename = "@state")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureHyperv {
    #[serde(rename = "@mode")]
    pub mode: String,
    pub relaxed: Option<FeatureState>,
    pub vapic: Option<FeatureState>,
    pub spinlocks: Option<FeatureSpinlocks>,
    pub vpindex: Option<FeatureState>,
    pub runtime: Option<FeatureState>,
    pub synic: Option<FeatureState>,
    pub stimer: Option<FeatureState>,
    pub reset: Option<FeatureState>,
    pub vendor_id: Option<FeatureVendorId>,
    pub frequencies: Option<FeatureState>,
    pub reenlightenment: Option<FeatureState>,
    pub tlbflush: Option<FeatureState>,
    pub ipi: Option<FeatureState>,
    pub evmcs: Option<FeatureState>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureSpinlocks {
    #[serde(rename = "@state")]
    pub state: String,
    #[serde(rename = "@retries")]
    pub retries: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureVendorId {
    #[serde(rename = "@state")]
    pub state: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureKvm {
    pub hidden: Option<FeatureState>,
    #[serde(rename = "hint-dedicated")]
    pub hint_dedicated: Option<FeatureState>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cpu {
    #[serde(rename = "@mode")]
    pub mode: String,
    pub model: String,
    #[serde(rename = "feature")]
    pub features: Vec<CpuFeature>,
    pub topology: Option<CpuTopology>,
    pub numa: Option<Numa>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuFeature {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@policy")]
    pub policy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuTopology {
    #[serde(rename = "@sockets")]
    pub sockets: u32,
    #[serde(rename = "@cores")]
    pub cores: u32,
    #[serde(rename = "@threads")]
    pub threads: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Numa {
    #[serde(rename = "cell")]
    pub cells: Vec<NumaCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumaCell {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@cpus")]
    pub cpus: String,
    #[serde(rename = "@memory")]
    pub memory: u64,
    #[serde(rename = "@unit")]
    pub unit: String,
    #[serde(rename = "@memAccess")]
    pub mem_access: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vcpu {
    #[serde(rename = "@placement")]
    pub placement: String,
    #[serde(rename = "$text")]
    pub cpus: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuTune {
    #[serde(rename = "vcpupin")]
    pub vcpu_pin: Vec<CpuTuneVcpuPin>,
    #[serde(rename = "iothreadpin")]
    pub io_thread_pin: Vec<CpuTuneIoThreadPin>,
    #[serde(rename = "emulatorpin")]
    pub emulator_pin: Option<CpuEmulatorPin>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuTuneVcpuPin {
    #[serde(rename = "@vcpu")]
    pub vcpu: u32,
    #[serde(rename = "@cpuset")]
    pub cpu_set: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuTuneIoThreadPin {
    #[serde(rename = "@iothread")]
    pub io_thread: u32,
    #[serde(rename = "@cpuset")]
    pub cpu_set: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CpuEmulatorPin {
    #[serde(rename = "@cpuset")]
    pub cpu_set: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumaTune {
    pub memory: NumaTuneMemory,
    #[serde(rename = "memnode")]
    pub mem_nodes: Vec<MemNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumaTuneMemory {
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@nodeset")]
    pub node_set: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemNode {
    #[serde(rename = "@cellid")]
    pub cell_id: u32,
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@nodeset")]
    pub node_set: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Devices {
    pub emulator: String,
    #[serde(rename = "interface")]
    pub interfaces: Vec<Interface>,
    #[serde(rename = "channel")]
    pub channels: Vec<Channel>,
    #[serde(rename = "hostdev")]
    pub host_devices: Vec<HostDevice>,
    #[serde(rename = "controller")]
    pub controllers: Vec<Controller>,
    #[serde(rename = "video")]
    pub video: Vec<Video>,
    #[serde(rename = "graphics")]
    pub graphics: Vec<Graphics>,
    #[serde(rename = "memballoon")]
    pub ballooning: Option<MemBalloon>,
    #[serde(rename = "serial")]
    pub serials: Vec<Serial>,
    #[serde(rename = "console")]
    pub consoles: Vec<Console>,
    #[serde(rename = "watchdog")]
    pub watchdogs: Vec<Watchdog>,
    pub rng: Option<Rng>,
    #[serde(rename = "filesystem")]
    pub filesystems: Vec<FilesystemDevice>,
    #[serde(rename = "redirdev")]
    pub redirs: Vec<RedirectedDevice>,
    #[serde(rename = "sound")]
    pub sound_cards: Vec<SoundCard>,
    #[serde(rename = "disk")]
    pub disks: Vec<Disk>,
    #[serde(rename = "input")]
    pub inputs: Vec<Input>,
    #[serde(rename = "tpm")]
    pub tpms: Vec<Tpm>,
    #[serde(rename = "vsock")]
    pub vsock: Option<Vsock>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "@type")]
    pub address_type: String,
    #[serde(rename = "@domain")]
    pub domain: String,
    #[serde(rename = "@bus")]
    pub bus: String,
    #[serde(rename = "@slot")]
    pub slot: String,
    #[serde(rename = "@function")]
    pub function: String,
    #[serde(rename = "@controller")]
    pub controller: String,
    #[serde(rename = "@target")]
    pub target: String,
    #[serde(rename = "@unit")]
    pub unit: String,
    #[serde(rename = "@port")]
    pub port: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alias {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BootOrder {
    #[serde(rename = "@order")]
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Disk {
    #[serde(rename = "@device")]
    pub device: String,
    #[serde(rename = "@snapshot")]
    pub snapshot: String,
    #[serde(rename = "@type")]
    pub disk_type: String,
    #[serde(rename = "@model")]
    pub model: String,
    pub source: DiskSource,
    pub target: DiskTarget,
    pub serial: String,
    pub driver: Option<DiskDriver>,
    #[serde(rename = "readonly")]
    pub read_only: Option<Empty>,
    pub auth: Option<DiskAuth>,
    pub alias: Option<Alias>,
    #[serde(rename = "backingStore")]
    pub backing_store: Option<BackingStore>,
    #[serde(rename = "boot")]
    pub boot_order: Option<BootOrder>,
    pub address: Option<Address>,
    #[serde(rename = "blockio")]
    pub block_io: Option<BlockIo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskSource {
    #[serde(rename = "@dev")]
    pub dev: String,
    #[serde(rename = "@file")]
    pub file: String,
    #[serde(rename = "@startupPolicy")]
    pub startup_policy: String,
    #[serde(rename = "@protocol")]
    pub protocol: String,
    #[serde(rename = "@name")]
    pub name: String,
    pub host: Option<DiskSourceHost>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskSourceHost {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@port")]
    pub port: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskTarget {
    #[serde(rename = "@bus")]
    pub bus: String,
    #[serde(rename = "@dev")]
    pub device: String,
    #[serde(rename = "@tray")]
    pub tray: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskDriver {
    #[serde(rename = "@cache")]
    pub cache: String,
    #[serde(rename = "@error_policy")]
    pub error_policy: String,
    #[serde(rename = "@io")]
    pub io: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@type")]
    pub driver_type: String,
    #[serde(rename = "@iothread")]
    pub io_thread: Option<u32>,
    #[serde(rename = "@queues")]
    pub queues: Option<u32>,
    #[serde(rename = "@discard")]
    pub discard: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskAuth {
    #[serde(rename = "@username")]
    pub username: String,
    pub secret: Option<DiskSecret>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskSecret {
    #[serde(rename = "@type")]
    pub secret_type: String,
    #[serde(rename = "@usage")]
    pub usage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackingStore {
    #[serde(rename = "@type")]
    pub store_type: String,
    pub format: Option<BackingStoreFormat>,
    pub source: Option<DiskSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackingStoreFormat {
    #[serde(rename = "@type")]
    pub format_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlockIo {
    #[serde(rename = "@logical_block_size")]
    pub logical: u32,
    #[serde(rename = "@physical_block_size")]
    pub physical: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Interface {
    #[serde(rename = "@type")]
    pub interface_type: String,
    #[serde(rename = "@managed")]
    pub managed: String,
    pub address: Option<Address>,
    pub source: InterfaceSource,
    pub target: Option<InterfaceTarget>,
    pub model: Option<Model>,
    #[serde(rename = "mac")]
    pub mac: Option<Mac>,
    pub mtu: Option<Mtu>,
    #[serde(rename = "boot")]
    pub boot_order: Option<BootOrder>,
    pub rom: Option<Rom>,
    pub alias: Option<Alias>,
    pub driver: Option<InterfaceDriver>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceSource {
    #[serde(rename = "@network")]
    pub network: String,
    #[serde(rename = "@dev")]
    pub device: String,
    #[serde(rename = "@bridge")]
    pub bridge: String,
    #[serde(rename = "@mode")]
    pub mode: String,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceTarget {
    #[serde(rename = "@dev")]
    pub device: String,
    #[serde(rename = "@managed")]
    pub managed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceDriver {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@queues")]
    pub queues: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Model {
    #[serde(rename = "@type")]
    pub model_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Mac {
    #[serde(rename = "@address")]
    pub mac: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Mtu {
    #[serde(rename = "@size")]
    pub size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rom {
    #[serde(rename = "@enabled")]
    pub enabled: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(rename = "@type")]
    pub channel_type: String,
    pub source: Option<ChannelSource>,
    pub target: Option<ChannelTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChannelSource {
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@path")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChannelTarget {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@type")]
    pub target_type: String,
    #[serde(rename = "@address")]
    pub address: String,
    #[serde(rename = "@port")]
    pub port: Option<u32>,
    #[serde(rename = "@state")]
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostDevice {
    pub source: HostDeviceSource,
    #[serde(rename = "@type")]
    pub device_type: String,
    #[serde(rename = "boot")]
    pub boot_order: Option<BootOrder>,
    #[serde(rename = "@managed")]
    pub managed: String,
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@model")]
    pub model: String,
    pub address: Option<Address>,
    pub alias: Option<Alias>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostDeviceSource {
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Controller {
    #[serde(rename = "@type")]
    pub controller_type: String,
    #[serde(rename = "@index")]
    pub index: String,
    #[serde(rename = "@model")]
    pub model: String,
    pub driver: Option<ControllerDriver>,
    pub alias: Option<Alias>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerDriver {
    #[serde(rename = "@iothread")]
    pub io_thread: Option<u32>,
    #[serde(rename = "@queues")]
    pub queues: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Video {
    pub model: VideoModel,
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
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Graphics {
    #[serde(rename = "@autoport")]
    pub autoport: String,
    #[serde(rename = "@defaultMode")]
    pub default_mode: String,
    pub listen: Option<GraphicsListen>,
    #[serde(rename = "@passwd")]
    pub passwd: String,
    #[serde(rename = "@port")]
    pub port: i32,
    #[serde(rename = "@type")]
    pub graphics_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphicsListen {
    #[serde(rename = "@type")]
    pub listen_type: String,
    #[serde(rename = "@address")]
    pub address: String,
    #[serde(rename = "@network")]
    pub network: String,
    #[serde(rename = "@socket")]
    pub socket: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemBalloon {
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "@freePageReporting")]
    pub free_page_reporting: String,
    pub stats: Option<Stats>,
    pub address: Option<Address>,
    pub driver: Option<ControllerDriver>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(rename = "@period")]
    pub period: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Serial {
    #[serde(rename = "@type")]
    pub serial_type: String,
    pub target: Option<SerialTarget>,
    pub source: Option<SerialSource>,
    pub alias: Option<Alias>,
    pub log: Option<SerialLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SerialTarget {
    #[serde(rename = "@port")]
    pub port: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SerialSource {
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@path")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SerialLog {
    #[serde(rename = "@file")]
    pub file_path: String,
    #[serde(rename = "@append")]
    pub append: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Console {
    #[serde(rename = "@type")]
    pub console_type: String,
    pub target: Option<ConsoleTarget>,
    pub source: Option<ConsoleSource>,
    pub alias: Option<Alias>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleTarget {
    #[serde(rename = "@type")]
    pub target_type: Option<String>,
    #[serde(rename = "@port")]
    pub port: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleSource {
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@path")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Watchdog {
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "@action")]
    pub action: String,
    pub alias: Option<Alias>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rng {
    #[serde(rename = "@model")]
    pub model: String,
    pub backend: Option<RngBackend>,
    pub address: Option<Address>,
    pub driver: Option<ControllerDriver>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RngBackend {
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "$text")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesystemDevice {
    #[serde(rename = "@type")]
    pub fs_type: String,
    #[serde(rename = "@accessMode")]
    pub access_mode: String,
    pub source: Option<FilesystemSource>,
    pub target: Option<FilesystemTarget>,
    pub driver: Option<FilesystemDriver>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesystemSource {
    #[serde(rename = "@dir")]
    pub dir: String,
    #[serde(rename = "@socket")]
    pub socket: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesystemTarget {
    #[serde(rename = "@dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesystemDriver {
    #[serde(rename = "@type")]
    pub driver_type: String,
    #[serde(rename = "@queue")]
    pub queue: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RedirectedDevice {
    #[serde(rename = "@type")]
    pub device_type: String,
    #[serde(rename = "@bus")]
    pub bus: String,
    pub source: RedirectedDeviceSource,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RedirectedDeviceSource {
    #[serde(rename = "@mode")]
    pub mode: String,
    #[serde(rename = "@path")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SoundCard {
    pub alias: Option<Alias>,
    #[serde(rename = "@model")]
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Input {
    #[serde(rename = "@bus")]
    pub bus: String,
    #[serde(rename = "@type")]
    pub input_type: String,
    pub alias: Option<Alias>,
    pub address: Option<Address>,
    #[serde(rename = "@model")]
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tpm {
    #[serde(rename = "@model")]
    pub model: String,
    pub backend: TpmBackend,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TpmBackend {
    #[serde(rename = "@type")]
    pub backend_type: String,
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@persistent_state")]
    pub persistent_state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vsock {
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "cid")]
    pub cid: Cid,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cid {
    #[serde(rename = "@auto")]
    pub auto: String,
    #[serde(rename = "@address")]
    pub address: u32,
}
